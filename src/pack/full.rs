// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full packer: primality, divisor classes and a multi-point layout buffer.
//!
//! # Point buffer format
//!
//! ```text
//! [x0 y0 x1 y1 ... x9 y9 | 0 0 | x0 y0 ... | 0 0 | ...]
//!  tier 2 (up to 10 pts)   end   tier 3      end
//! ```
//!
//! Writing stops once the write index reaches `points_len - 2`: earlier tiers
//! win and later tiers are dropped without an error. With the default budget
//! of 300 floats, tiers 2 through 17 fit whole and tier 18 is cut after nine
//! points with no end marker.

use log::{debug, trace};
use serde::Serialize;

use crate::geometry::constants::{
    FULL_POINTS_LEN, FULL_POINTS_PER_TIER, FULL_TIER_LIMIT, MIN_TIER,
};
use crate::memo::CacheStore;
use crate::pack::{PackedBuffer, Packer};

/// Buffers produced by [`FullPacker`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullUniforms {
    /// 1.0 for prime tiers, 0.0 otherwise; length `max_tier`.
    pub primality: PackedBuffer,

    /// Divisor class value per tier; length `max_tier`.
    pub divisor_class: PackedBuffer,

    /// Interleaved layout points with end markers; length `points_len`.
    pub points: PackedBuffer,

    /// `min(max_tier, tier_limit)`, the tier bound the shader should loop to.
    pub tier_count_used: usize,

    /// Final write index into `points`; never more than `points_len - 2`.
    pub points_written: usize,
}

/// Packs every tier below `tier_limit`, with up to `points_per_tier` layout
/// points each, into a point buffer of `points_len` floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullPacker {
    pub tier_limit: usize,
    pub points_per_tier: usize,
    pub points_len: usize,
}

impl Default for FullPacker {
    fn default() -> Self {
        Self {
            tier_limit: FULL_TIER_LIMIT,
            points_per_tier: FULL_POINTS_PER_TIER,
            points_len: FULL_POINTS_LEN,
        }
    }
}

impl Packer for FullPacker {
    type Output = FullUniforms;

    fn pack(&self, cache: &CacheStore) -> FullUniforms {
        let max_tier = cache.max_tier();
        let tier_end = max_tier.min(self.tier_limit);
        // The last x/y pair of the buffer is never written.
        let write_limit = self.points_len.saturating_sub(2);

        trace!("[FullPacker] Packing tiers {}..{}", MIN_TIER, tier_end);

        let mut primality = PackedBuffer::zeroed(max_tier);
        let mut divisor_class = PackedBuffer::zeroed(max_tier);
        let mut points = PackedBuffer::zeroed(self.points_len);
        let mut index = 0;
        let mut exhausted_at = None;

        for tier in MIN_TIER..tier_end {
            primality.set(tier, if cache.is_prime(tier) { 1.0 } else { 0.0 });
            divisor_class.set(tier, cache.divisor_class(tier) as f32);

            let layout = cache.layout_points(tier);
            for point in layout.iter().take(self.points_per_tier) {
                if index >= write_limit {
                    break;
                }
                points.set(index, point.x as f32);
                points.set(index + 1, point.y as f32);
                index += 2;
            }

            // End marker: the buffer is already zeroed, only the index moves.
            if index < write_limit {
                index += 2;
            } else if exhausted_at.is_none() {
                exhausted_at = Some(tier);
            }
        }

        if let Some(tier) = exhausted_at {
            debug!(
                "[FullPacker] Point budget of {} floats exhausted at tier {}, later tiers dropped",
                self.points_len, tier
            );
        }

        FullUniforms {
            primality,
            divisor_class,
            points,
            tier_count_used: tier_end,
            points_written: index,
        }
    }
}
