//! Wheel configuration surface
//!
//! Mirrors the embedding page's three inputs. Out-of-range values reset to
//! the documented defaults, the same policy the surrounding UI applies
//! before the core ever sees them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// User-facing wheel configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Number of equal wedges, [2, 359]
    pub sector_count: u32,
    /// Spin animation duration in seconds, [1, 60]
    pub spin_duration_secs: f32,
    /// Degrees per manual nudge, >= 1
    pub rotation_step: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            sector_count: DEFAULT_SECTOR_COUNT,
            spin_duration_secs: DEFAULT_SPIN_DURATION_SECS,
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }
}

impl WheelConfig {
    /// Out-of-range input resets to the default sector count
    pub fn set_sector_count(&mut self, count: u32) {
        self.sector_count = if (MIN_SECTOR_COUNT..=MAX_SECTOR_COUNT).contains(&count) {
            count
        } else {
            DEFAULT_SECTOR_COUNT
        };
    }

    /// Out-of-range input resets to the default duration
    pub fn set_spin_duration(&mut self, secs: f32) {
        self.spin_duration_secs =
            if (MIN_SPIN_DURATION_SECS..=MAX_SPIN_DURATION_SECS).contains(&secs) {
                secs
            } else {
                DEFAULT_SPIN_DURATION_SECS
            };
    }

    /// Steps below one degree reset to the default step
    pub fn set_rotation_step(&mut self, step: f32) {
        self.rotation_step = if step >= MIN_ROTATION_STEP {
            step
        } else {
            DEFAULT_ROTATION_STEP
        };
    }

    /// Parse a stored configuration, falling back to defaults on bad JSON
    /// and re-clamping every field.
    pub fn from_json(json: &str) -> Self {
        let mut config = Self::default();
        if let Ok(parsed) = serde_json::from_str::<Self>(json) {
            config.set_sector_count(parsed.sector_count);
            config.set_spin_duration(parsed.spin_duration_secs);
            config.set_rotation_step(parsed.rotation_step);
        }
        config
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
