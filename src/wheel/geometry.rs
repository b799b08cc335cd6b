//! Sector geometry: equal-wedge partition and SVG path descriptions
//!
//! A wheel with `n` sectors splits the circle into `n` equal wedges. Sector
//! `i` spans `[i * 360/n, (i+1) * 360/n]` degrees, measured before any
//! rotation is applied; only the wheel's overall orientation ever moves,
//! never the boundaries relative to each other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RADIUS;
use crate::point_on_circle;

/// One pie-slice wedge of the wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorArc {
    pub index: u32,
    /// Start boundary in degrees, before rotation
    pub start_angle: f32,
    /// End boundary in degrees, before rotation
    pub end_angle: f32,
    /// SVG path description for the closed wedge
    pub path: String,
}

/// Built wheel geometry, or the degradation path for degenerate input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WheelGeometry {
    /// `n` equal sectors partitioning the circle
    Sectors(Vec<SectorArc>),
    /// Degenerate input: a single undivided circle, no sectors, no pointer
    FallbackCircle { center: Vec2, radius: f32 },
}

/// Start boundary of sector `index` in degrees
#[inline]
pub fn sector_start_angle(index: u32, sector_count: u32) -> f32 {
    index as f32 * 360.0 / sector_count as f32
}

/// End boundary of sector `index` in degrees
#[inline]
pub fn sector_end_angle(index: u32, sector_count: u32) -> f32 {
    sector_start_angle(index + 1, sector_count)
}

/// Closed wedge path for one sector: move to center, line out to the
/// start-boundary point, a single non-reflex arc sweeping positively to the
/// end-boundary point, close back to center.
pub fn sector_path(index: u32, sector_count: u32, center: Vec2, radius: f32) -> String {
    let from = point_on_circle(center, radius, sector_start_angle(index, sector_count));
    let to = point_on_circle(center, radius, sector_end_angle(index, sector_count));
    format!(
        "M{},{} L{},{} A{},{} 0 0,1 {},{}z",
        center.x, center.y, from.x, from.y, radius, radius, to.x, to.y
    )
}

impl WheelGeometry {
    /// Build the sector set for a wheel.
    ///
    /// Degenerate input (`sector_count < 1`, or a missing/non-positive
    /// radius) falls back to a single undivided circle: no sectors, no
    /// pointer logic. That is the documented safe degradation, not an
    /// error.
    pub fn build(sector_count: u32, center: Vec2, radius: Option<f32>) -> Self {
        let r = radius.unwrap_or(DEFAULT_RADIUS);
        if sector_count < 1 || r <= 0.0 {
            let radius = if r > 0.0 { r } else { DEFAULT_RADIUS };
            return Self::FallbackCircle { center, radius };
        }

        let sectors = (0..sector_count)
            .map(|i| SectorArc {
                index: i,
                start_angle: sector_start_angle(i, sector_count),
                end_angle: sector_end_angle(i, sector_count),
                path: sector_path(i, sector_count, center, r),
            })
            .collect();
        Self::Sectors(sectors)
    }

    /// Sectors of a built wheel; empty for the fallback circle
    pub fn sectors(&self) -> &[SectorArc] {
        match self {
            Self::Sectors(sectors) => sectors,
            Self::FallbackCircle { .. } => &[],
        }
    }

    pub fn sector_count(&self) -> u32 {
        self.sectors().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_partition_the_circle() {
        for n in [2u32, 3, 5, 12, 359] {
            let span = 360.0 / n as f32;
            for i in 0..n {
                let width = sector_end_angle(i, n) - sector_start_angle(i, n);
                assert!((width - span).abs() < 1.0e-3, "n={n} i={i}");
                if i + 1 < n {
                    assert_eq!(sector_start_angle(i + 1, n), sector_end_angle(i, n));
                }
            }
            assert_eq!(sector_start_angle(0, n), 0.0);
            assert_eq!(sector_end_angle(n - 1, n), 360.0);
        }
    }

    #[test]
    fn test_four_sector_wheel_end_to_end() {
        let center = Vec2::new(250.0, 250.0);
        let geometry = WheelGeometry::build(4, center, Some(200.0));
        let sectors = geometry.sectors();
        assert_eq!(sectors.len(), 4);

        let boundaries: Vec<f32> = sectors
            .iter()
            .map(|s| s.start_angle)
            .chain([sectors[3].end_angle])
            .collect();
        assert_eq!(boundaries, vec![0.0, 90.0, 180.0, 270.0, 360.0]);
        for sector in sectors {
            assert_eq!(sector.end_angle - sector.start_angle, 90.0);
        }
    }

    #[test]
    fn test_wedge_path_description() {
        let center = Vec2::new(250.0, 250.0);
        let geometry = WheelGeometry::build(4, center, Some(200.0));
        let first = &geometry.sectors()[0];

        // Start boundary is at angle 0: exactly (cx + r, cy).
        let arc_end = point_on_circle(center, 200.0, 90.0);
        let expected = format!(
            "M250,250 L450,250 A200,200 0 0,1 {},{}z",
            arc_end.x, arc_end.y
        );
        assert_eq!(first.path, expected);
    }

    #[test]
    fn test_degenerate_sector_count_falls_back() {
        let center = Vec2::new(250.0, 250.0);
        let geometry = WheelGeometry::build(0, center, Some(150.0));
        assert_eq!(geometry.sector_count(), 0);
        match geometry {
            WheelGeometry::FallbackCircle { radius, .. } => assert_eq!(radius, 150.0),
            WheelGeometry::Sectors(_) => panic!("expected fallback circle"),
        }
    }

    #[test]
    fn test_degenerate_radius_falls_back_to_default() {
        let center = Vec2::new(250.0, 250.0);
        for radius in [None, Some(0.0), Some(-5.0)] {
            let geometry = WheelGeometry::build(0, center, radius);
            match geometry {
                WheelGeometry::FallbackCircle { radius, .. } => {
                    assert_eq!(radius, DEFAULT_RADIUS)
                }
                WheelGeometry::Sectors(_) => panic!("expected fallback circle"),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_every_boundary_appears_exactly_once(n in 2u32..=359) {
            let geometry = WheelGeometry::build(n, Vec2::new(250.0, 250.0), Some(200.0));
            let sectors = geometry.sectors();
            prop_assert_eq!(sectors.len() as u32, n);
            // Each sector starts where the previous one ends; start boundaries
            // cover [0, 360) exactly once.
            for pair in sectors.windows(2) {
                prop_assert_eq!(pair[1].start_angle, pair[0].end_angle);
                prop_assert!(pair[0].start_angle < pair[1].start_angle);
            }
            prop_assert_eq!(sectors[0].start_angle, 0.0);
            prop_assert_eq!(sectors[n as usize - 1].end_angle, 360.0);
        }
    }
}
