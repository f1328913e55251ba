// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Radial layout generation.
//!
//! Tier `t` gets `min(t, MAX_LAYOUT_POINTS)` points on the circle of radius
//! `t`. Point `j` sits at angle `j / t` of a full turn, so tiers above the cap
//! only cover the first `50 / t` of their circle.

use crate::geometry::constants::MAX_LAYOUT_POINTS;
use crate::geometry::{LayoutPoint, Tier};

/// Generate the layout points of `tier` in angular index order.
///
/// Deterministic: the same tier always yields the same points.
pub fn compute_layout_points(tier: Tier) -> Vec<LayoutPoint> {
    let count = tier.min(MAX_LAYOUT_POINTS);
    (0..count)
        .map(|index| LayoutPoint::on_ring(tier, index))
        .collect()
}
