// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point types for ring layouts and pointer input.
//!
//! A layout point sits on the circle of its tier: the radius is the tier
//! number itself, so outer rings are proportionally larger.

use serde::Serialize;

/// A tier number, identifying one ring of the visualization.
///
/// Cached tiers lie in `MIN_TIER..=max_tier`.
pub type Tier = usize;

/// One of the evenly spaced points on the circle of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPoint {
    /// Horizontal coordinate.
    pub x: f64,

    /// Vertical coordinate.
    pub y: f64,

    /// The tier whose circle this point lies on.
    pub tier: Tier,

    /// Angular index of this point within its tier, starting at 0.
    pub index: usize,
}

impl LayoutPoint {
    /// Create the point with angular index `index` on the circle of `tier`.
    ///
    /// The angle is `index / tier` of a full turn and the radius is `tier`.
    pub fn on_ring(tier: Tier, index: usize) -> Self {
        let angle = (index as f64 / tier as f64) * std::f64::consts::TAU;
        let radius = tier as f64;
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
            tier,
            index,
        }
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Pointer position supplied by the host animation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_point_on_positive_x_axis() {
        let p = LayoutPoint::on_ring(7, 0);
        assert_eq!(p.x, 7.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.tier, 7);
        assert_eq!(p.index, 0);
    }

    #[test]
    fn test_quarter_turn() {
        let p = LayoutPoint::on_ring(4, 1);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radius_equals_tier() {
        for index in 0..13 {
            let p = LayoutPoint::on_ring(13, index);
            assert_abs_diff_eq!(p.radius(), 13.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pointer_default_is_origin() {
        assert_eq!(Pointer::default(), Pointer::new(0.0, 0.0));
    }
}
