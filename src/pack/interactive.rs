// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive packer: time- and pointer-animated buffers, recomputed per frame.
//!
//! For tier `t` at time `s` with pointer `(px, py)`:
//!
//! ```text
//! opacity(t) = max(0.1, base(t) + sin(0.5 s + 0.1 t) * 0.3)    base = 0.8 prime, 0.4 otherwise
//! phase      = 0.1 s + 2 px
//! point(t)   = first(t) + 2 * (sin(phase + t), cos(phase + t))
//! ```
//!
//! Every term is a continuous function of `s`, so frames change smoothly.
//! Nothing is retained between calls.

use log::trace;
use serde::Serialize;

use crate::geometry::constants::{
    COMPOSITE_BASE_OPACITY, INTERACTIVE_TIER_LIMIT, JITTER_POINTER_WEIGHT, JITTER_RADIUS,
    JITTER_TIME_RATE, MIN_OPACITY, MIN_TIER, OPACITY_TIER_PHASE, OPACITY_TIME_RATE,
    OPACITY_WAVE_AMPLITUDE, PRIME_BASE_OPACITY,
};
use crate::geometry::{Pointer, Tier};
use crate::memo::CacheStore;
use crate::pack::{PackedBuffer, Packer};

/// Buffers produced by [`InteractivePacker`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveUniforms {
    /// 1.0 for prime tiers, 0.0 otherwise; length `tier_limit`.
    pub primality: PackedBuffer,

    /// Jittered first point of tier `t` at `2t`, `2t + 1`; length `2 * tier_limit`.
    pub points: PackedBuffer,

    /// Per-tier opacity; length `tier_limit`.
    pub opacity: PackedBuffer,
}

/// Packs one animation frame for the given time and pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractivePacker {
    pub time: f64,
    pub pointer: Pointer,
    pub tier_limit: usize,
}

impl InteractivePacker {
    pub fn new(time: f64, pointer: Pointer) -> Self {
        Self {
            time,
            pointer,
            tier_limit: INTERACTIVE_TIER_LIMIT,
        }
    }

    /// Opacity of a tier at this packer's time.
    pub fn opacity(&self, tier: Tier, prime: bool) -> f64 {
        let base = if prime {
            PRIME_BASE_OPACITY
        } else {
            COMPOSITE_BASE_OPACITY
        };
        let wave = (self.time * OPACITY_TIME_RATE + tier as f64 * OPACITY_TIER_PHASE).sin()
            * OPACITY_WAVE_AMPLITUDE;
        (base + wave).max(MIN_OPACITY)
    }

    /// Offset added to a tier's first layout point.
    pub fn jitter(&self, tier: Tier) -> (f64, f64) {
        let phase = self.time * JITTER_TIME_RATE + self.pointer.x * JITTER_POINTER_WEIGHT;
        let angle = phase + tier as f64;
        (angle.sin() * JITTER_RADIUS, angle.cos() * JITTER_RADIUS)
    }
}

impl Default for InteractivePacker {
    fn default() -> Self {
        Self::new(0.0, Pointer::default())
    }
}

impl Packer for InteractivePacker {
    type Output = InteractiveUniforms;

    fn pack(&self, cache: &CacheStore) -> InteractiveUniforms {
        trace!(
            "[InteractivePacker] Packing frame at time {} pointer ({}, {})",
            self.time,
            self.pointer.x,
            self.pointer.y
        );

        let mut primality = PackedBuffer::zeroed(self.tier_limit);
        let mut opacity = PackedBuffer::zeroed(self.tier_limit);
        let mut points = PackedBuffer::zeroed(self.tier_limit * 2);

        for tier in MIN_TIER..self.tier_limit {
            let prime = cache.is_prime(tier);
            primality.set(tier, if prime { 1.0 } else { 0.0 });
            opacity.set(tier, self.opacity(tier, prime) as f32);

            if let Some(point) = cache.layout_points(tier).first() {
                let (dx, dy) = self.jitter(tier);
                points.set(tier * 2, (point.x + dx) as f32);
                points.set(tier * 2 + 1, (point.y + dy) as f32);
            }
        }

        InteractiveUniforms {
            primality,
            points,
            opacity,
        }
    }
}
