//! Wheel rotation state
//!
//! One scalar orientation shared rigidly by every sector: at any quiescent
//! moment all sectors sit at the same rotation. The stored value is
//! unnormalized; nudges accumulate signed degrees and reduction to the
//! canonical turn happens at read time.

use serde::{Deserialize, Serialize};

use super::angle::coterminal;

/// Spin lock phase. `Idle -> Spinning` only via a spin request;
/// `Spinning -> Idle` only when the spin's completion timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// Direction of a manual pre-spin nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NudgeDirection {
    /// Counter-rotate: subtracts the step
    Left,
    /// Co-rotate: adds the step
    Right,
}

/// Rotation state for one built wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelState {
    sector_count: u32,
    /// Cumulative signed rotation in degrees, unnormalized
    orientation: f32,
}

impl WheelState {
    pub fn new(sector_count: u32) -> Self {
        Self {
            sector_count,
            orientation: 0.0,
        }
    }

    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Raw cumulative orientation; may lie outside [0, 360)
    pub fn current_orientation(&self) -> f32 {
        self.orientation
    }

    /// Where the wheel is parked on the circle
    pub fn parked_angle(&self) -> f32 {
        coterminal(self.orientation)
    }

    /// Rotate by `step` degrees without spinning. Returns the new
    /// orientation, left unnormalized so successive nudges accumulate.
    pub fn apply_nudge(&mut self, step: f32, direction: NudgeDirection) -> f32 {
        match direction {
            NudgeDirection::Left => self.orientation -= step,
            NudgeDirection::Right => self.orientation += step,
        }
        self.orientation
    }

    /// Commit a spin to `terminal_offset` plus `show_spins` extra full
    /// turns. The extra turns exist purely so the animation appears to whirl
    /// before settling. Returns the animation endpoints `(from, to)`; the
    /// stored orientation becomes the coterminal settle angle of `to`, so
    /// the next operation starts from where the wheel visually stopped
    /// rather than the inflated multi-turn value.
    pub fn apply_spin(&mut self, terminal_offset: f32, show_spins: u32) -> (f32, f32) {
        let from = coterminal(self.orientation);
        let to = terminal_offset + 360.0 * show_spins as f32;
        self.orientation = coterminal(to);
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nudge_accumulates_unnormalized() {
        let mut state = WheelState::new(4);
        state.apply_nudge(15.0, NudgeDirection::Left);
        assert_eq!(state.current_orientation(), -15.0);
        assert_eq!(state.parked_angle(), 345.0);

        state.apply_nudge(15.0, NudgeDirection::Left);
        assert_eq!(state.current_orientation(), -30.0);
    }

    #[test]
    fn test_spin_inflates_then_parks_coterminal() {
        let mut state = WheelState::new(4);
        let (from, to) = state.apply_spin(123.0, 100);
        assert_eq!(from, 0.0);
        assert_eq!(to, 123.0 + 36_000.0);
        assert_eq!(state.current_orientation(), 123.0);
    }

    #[test]
    fn test_spin_starts_from_parked_angle() {
        let mut state = WheelState::new(4);
        state.apply_nudge(400.0, NudgeDirection::Right);
        let (from, _) = state.apply_spin(90.0, 100);
        assert_eq!(from, 40.0);
    }

    proptest! {
        #[test]
        fn prop_nudge_left_then_right_restores(step in 1.0f32..720.0) {
            let mut state = WheelState::new(6);
            let before = state.parked_angle();
            state.apply_nudge(step, NudgeDirection::Left);
            state.apply_nudge(step, NudgeDirection::Right);
            prop_assert!((state.parked_angle() - before).abs() % 360.0 < 1.0e-3);
        }

        #[test]
        fn prop_spin_parks_inside_one_turn(offset in 1.0f32..360.0) {
            let mut state = WheelState::new(4);
            let (_, to) = state.apply_spin(offset.floor(), 100);
            prop_assert!((0.0..=360.0).contains(&state.current_orientation()));
            prop_assert_eq!(to - 36_000.0, state.current_orientation());
        }
    }
}
