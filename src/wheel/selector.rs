//! Terminal rotation angle selection
//!
//! A spin must settle with the pointer inside a sector, never on a
//! boundary. Candidates are whole degrees in [1, 359]; a candidate is
//! rejected when it equals the wheel's reference angle or coincides with
//! the first sector's end boundary under the current orientation. The test
//! checks the first boundary only, not all `n` of them; that narrower check
//! is kept from the original widget on purpose.

use std::fmt;

use rand::Rng;

use crate::consts::MAX_SELECTOR_ATTEMPTS;

/// Failure surfaced by the wheel core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    /// The rejection-sampling loop found no acceptable terminal angle
    /// within the attempt cap. Pathological count/reference combinations
    /// (e.g. a one-degree sector span) can reject every candidate; without
    /// the cap the loop would never return.
    BoundaryRejectionExhausted { attempts: u32 },
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryRejectionExhausted { attempts } => write!(
                f,
                "no terminal angle clear of sector boundaries after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for WheelError {}

/// Pick the random offset a spin settles on.
///
/// `reference_angle` is the wheel's current parked orientation (the first
/// sector's "from" position). The returned degree, applied as the wheel's
/// new rotation, never equals the reference and never lands on the first
/// sector's boundary under the current orientation.
pub fn pick_terminal_offset<R: Rng>(
    rng: &mut R,
    sector_count: u32,
    reference_angle: f32,
) -> Result<f32, WheelError> {
    let boundary = reference_angle + 360.0 / sector_count as f32;
    for _ in 0..MAX_SELECTOR_ATTEMPTS {
        let degree = rng.random_range(1..=359) as f32;
        // A zero boundary makes the remainder NaN, which compares unequal
        // and therefore rejects nothing, same as the original.
        if degree == reference_angle || degree % boundary == 0.0 {
            continue;
        }
        return Ok(degree);
    }
    Err(WheelError::BoundaryRejectionExhausted {
        attempts: MAX_SELECTOR_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_two_sectors_never_land_on_180_multiples() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let degree = pick_terminal_offset(&mut rng, 2, 0.0).unwrap();
            assert!((1.0..=359.0).contains(&degree));
            assert_ne!(degree, 0.0);
            assert_ne!(degree % 180.0, 0.0);
        }
    }

    #[test]
    fn test_never_returns_reference_angle() {
        let mut rng = Pcg32::seed_from_u64(99);
        for reference in [45.0, 120.0, 359.0] {
            for _ in 0..100 {
                let degree = pick_terminal_offset(&mut rng, 4, reference).unwrap();
                assert_ne!(degree, reference);
                assert_ne!(degree % (reference + 90.0), 0.0);
            }
        }
    }

    #[test]
    fn test_one_degree_sectors_exhaust_the_loop() {
        // 360 sectors put a boundary on every whole degree; every candidate
        // is rejected and the cap fires.
        let mut rng = Pcg32::seed_from_u64(3);
        let result = pick_terminal_offset(&mut rng, 360, 0.0);
        assert_eq!(
            result,
            Err(WheelError::BoundaryRejectionExhausted {
                attempts: crate::consts::MAX_SELECTOR_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_draws_stay_in_whole_degree_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let degree = pick_terminal_offset(&mut rng, 7, 0.0).unwrap();
            assert_eq!(degree.fract(), 0.0);
            assert!((1.0..=359.0).contains(&degree));
        }
    }
}
