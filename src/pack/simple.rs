// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple packer: primality plus one scaled representative point per tier.

use log::trace;
use serde::Serialize;

use crate::geometry::constants::{MIN_TIER, SIMPLE_POINT_SCALE, SIMPLE_TIER_LIMIT};
use crate::memo::CacheStore;
use crate::pack::{PackedBuffer, Packer};

/// Buffers produced by [`SimplePacker`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleUniforms {
    /// 1.0 for prime tiers, 0.0 otherwise; length `tier_limit`.
    pub primality: PackedBuffer,

    /// First layout point of tier `t` at `2t`, `2t + 1`; length `2 * tier_limit`.
    pub points: PackedBuffer,

    pub tier_count: usize,
}

/// Packs tiers below `tier_limit`, scaling each tier's first point by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplePacker {
    pub tier_limit: usize,
    pub scale: f64,
}

impl Default for SimplePacker {
    fn default() -> Self {
        Self {
            tier_limit: SIMPLE_TIER_LIMIT,
            scale: SIMPLE_POINT_SCALE,
        }
    }
}

impl Packer for SimplePacker {
    type Output = SimpleUniforms;

    fn pack(&self, cache: &CacheStore) -> SimpleUniforms {
        trace!("[SimplePacker] Packing tiers {}..{}", MIN_TIER, self.tier_limit);

        let mut primality = PackedBuffer::zeroed(self.tier_limit);
        let mut points = PackedBuffer::zeroed(self.tier_limit * 2);

        for tier in MIN_TIER..self.tier_limit {
            primality.set(tier, if cache.is_prime(tier) { 1.0 } else { 0.0 });

            if let Some(point) = cache.layout_points(tier).first() {
                points.set(tier * 2, (point.x * self.scale) as f32);
                points.set(tier * 2 + 1, (point.y * self.scale) as f32);
            }
        }

        SimpleUniforms {
            primality,
            points,
            tier_count: self.tier_limit,
        }
    }
}
