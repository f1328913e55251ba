// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named constants for tier ranges and shader buffer budgets.
//!
//! The buffer lengths here are tied to the fixed-size uniform arrays the
//! consuming shaders declare. Changing one of them means changing the shader
//! too; the packers themselves only ever read these values.
//!
//! # Buffer budgets
//!
//! | Packer      | Tiers     | Primality | Points | Extra          |
//! |-------------|-----------|-----------|--------|----------------|
//! | full        | `[2, 50)` | max_tier  | 300    | divisor class  |
//! | simple      | `[2, 30)` | 30        | 60     |                |
//! | interactive | `[2, 50)` | 50        | 100    | opacity (50)   |

/// Smallest tier that is ever cached or packed.
///
/// Tiers 0 and 1 have no ring: they are neither prime nor have a layout.
pub const MIN_TIER: usize = 2;

/// Highest tier built by [`crate::memo::CacheStore::new`].
pub const DEFAULT_MAX_TIER: usize = 150;

/// Small primes used for divisor classification, highest priority first.
pub const PRIORITY_DIVISORS: [u32; 7] = [17, 13, 11, 7, 5, 3, 2];

/// Maximum number of layout points generated for a single tier.
pub const MAX_LAYOUT_POINTS: usize = 50;

/// Exclusive upper tier bound for the full packer.
pub const FULL_TIER_LIMIT: usize = 50;

/// Layout points of each tier copied into the full point buffer.
pub const FULL_POINTS_PER_TIER: usize = 10;

/// Length of the full point buffer (150 interleaved x/y pairs).
pub const FULL_POINTS_LEN: usize = 300;

/// Exclusive upper tier bound for the simple packer, and its primality length.
pub const SIMPLE_TIER_LIMIT: usize = 30;

/// Length of the simple point buffer (one x/y pair per tier).
pub const SIMPLE_POINTS_LEN: usize = SIMPLE_TIER_LIMIT * 2;

/// Scale applied to the representative point of each tier in the simple packer.
pub const SIMPLE_POINT_SCALE: f64 = 0.5;

/// Exclusive upper tier bound for the interactive packer, and its primality
/// and opacity length.
pub const INTERACTIVE_TIER_LIMIT: usize = 50;

/// Length of the interactive point buffer (one x/y pair per tier).
pub const INTERACTIVE_POINTS_LEN: usize = INTERACTIVE_TIER_LIMIT * 2;

/// Base opacity of a prime tier before the time wave is applied.
pub const PRIME_BASE_OPACITY: f64 = 0.8;

/// Base opacity of a composite tier before the time wave is applied.
pub const COMPOSITE_BASE_OPACITY: f64 = 0.4;

/// Opacity never drops below this floor.
pub const MIN_OPACITY: f64 = 0.1;

/// Amplitude of the opacity time wave.
pub const OPACITY_WAVE_AMPLITUDE: f64 = 0.3;

/// Angular speed of the opacity time wave (radians per time unit).
pub const OPACITY_TIME_RATE: f64 = 0.5;

/// Phase shift of the opacity wave per tier.
pub const OPACITY_TIER_PHASE: f64 = 0.1;

/// Rate at which time advances the point jitter phase.
pub const JITTER_TIME_RATE: f64 = 0.1;

/// Weight of the pointer x coordinate in the point jitter phase.
pub const JITTER_POINTER_WEIGHT: f64 = 2.0;

/// Radius of the circle each jittered point moves on.
pub const JITTER_RADIUS: f64 = 2.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_divisors_descending() {
        for pair in PRIORITY_DIVISORS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_point_buffers_hold_one_pair_per_tier() {
        assert_eq!(SIMPLE_POINTS_LEN, 60);
        assert_eq!(INTERACTIVE_POINTS_LEN, 100);
        assert_eq!(FULL_POINTS_LEN % 2, 0);
    }

    #[test]
    fn test_packer_tiers_fit_default_cache() {
        assert!(FULL_TIER_LIMIT <= DEFAULT_MAX_TIER);
        assert!(SIMPLE_TIER_LIMIT <= DEFAULT_MAX_TIER);
        assert!(INTERACTIVE_TIER_LIMIT <= DEFAULT_MAX_TIER);
    }
}
