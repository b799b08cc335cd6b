//! Renderer instruction contract
//!
//! The core never draws. It instructs an embedding renderer through the
//! [`Renderer`] trait: wedge construction, rotation animation replays,
//! control gating, and the countdown label. A browser embedding translates
//! these calls into SVG/DOM mutations; tests record them.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Animation timing curve.
///
/// One fixed curve for every spin and nudge: fast start, slow settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    CubicEaseOut,
}

impl Easing {
    /// SMIL spline control points for this curve (`calcMode="spline"`,
    /// `keyTimes="0; 1"`)
    pub fn key_splines(&self) -> &'static str {
        match self {
            Self::CubicEaseOut => "0 1 .01 1",
        }
    }
}

/// RGB sector fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Uniformly random fill, one per sector at build time
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// Seven-character hexadecimal notation, as color inputs require
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Drawing and UI operations the core delegates to its embedding.
///
/// The core calls out to, but never implements, these. All angles are
/// degrees; rotation animations pivot on the wheel center.
pub trait Renderer {
    /// Draw one wedge of a freshly built wheel
    fn build_sector(&mut self, index: u32, sector_count: u32, path: &str, fill: Color);

    /// Degenerate-geometry degradation: a single undivided circle
    fn draw_fallback_circle(&mut self, center: Vec2, radius: f32);

    /// Animate (or instantly replay, when `from == to`) a sector's rotation
    fn animate_rotation(
        &mut self,
        sector_index: u32,
        from_deg: f32,
        to_deg: f32,
        duration_secs: f32,
        easing: Easing,
    );

    /// Enable/disable nudge and configuration controls as a unit
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Enable/disable per-sector color pickers as a unit
    fn set_color_editing_enabled(&mut self, enabled: bool);

    /// Show/hide the configuration panel
    fn set_config_panel_visible(&mut self, visible: bool);

    /// Display remaining spin seconds; `None` restores the idle label
    fn update_countdown_label(&mut self, seconds_remaining: Option<u32>);
}
