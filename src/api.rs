// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-process interface for the rendering binding.
//!
//! These free functions use the default packer budgets, so the buffer lengths
//! they return are fixed:
//!
//! | Function           | primality | points | other                     |
//! |--------------------|-----------|--------|---------------------------|
//! | `pack_full`        | max_tier  | 300    | divisor_class (max_tier)  |
//! | `pack_simple`      | 30        | 60     |                           |
//! | `pack_interactive` | 50        | 100    | opacity (50)              |
//!
//! Entry points taking signed integers validate them and fail with
//! [`RingsError::InvalidArgument`] on negative input.

use crate::error::{Result, RingsError};
use crate::geometry::{LayoutPoint, Pointer};
use crate::memo::{CacheStats, CacheStore};
use crate::pack::{
    FullPacker, FullUniforms, InteractivePacker, InteractiveUniforms, Packer, SimplePacker,
    SimpleUniforms,
};

/// Build the cache for tiers `2..=max_tier`.
pub fn build_cache(max_tier: i64) -> Result<CacheStore> {
    let max_tier = RingsError::non_negative("max_tier", max_tier)?;
    Ok(CacheStore::build(max_tier))
}

pub fn pack_full(cache: &CacheStore) -> FullUniforms {
    FullPacker::default().pack(cache)
}

pub fn pack_simple(cache: &CacheStore) -> SimpleUniforms {
    SimplePacker::default().pack(cache)
}

pub fn pack_interactive(cache: &CacheStore, time: f64, pointer: Pointer) -> InteractiveUniforms {
    InteractivePacker::new(time, pointer).pack(cache)
}

pub fn stats(cache: &CacheStore) -> CacheStats {
    cache.stats()
}

/// Checked [`CacheStore::is_prime`].
pub fn is_prime(cache: &CacheStore, tier: i64) -> Result<bool> {
    let tier = RingsError::non_negative("tier", tier)?;
    Ok(cache.is_prime(tier))
}

/// Checked [`CacheStore::divisor_class`].
pub fn divisor_class(cache: &CacheStore, tier: i64) -> Result<u32> {
    let tier = RingsError::non_negative("tier", tier)?;
    Ok(cache.divisor_class(tier))
}

/// Checked [`CacheStore::layout_points`].
pub fn layout_points(cache: &CacheStore, tier: i64) -> Result<&[LayoutPoint]> {
    let tier = RingsError::non_negative("tier", tier)?;
    Ok(cache.layout_points(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cache_rejects_negative() {
        assert_eq!(
            build_cache(-1).unwrap_err(),
            RingsError::InvalidArgument {
                name: "max_tier",
                value: -1
            }
        );
    }

    #[test]
    fn test_build_cache_accepts_tiny_ranges() {
        assert_eq!(build_cache(0).unwrap().tier_count(), 0);
        assert_eq!(build_cache(1).unwrap().tier_count(), 0);
        assert_eq!(build_cache(2).unwrap().tier_count(), 1);
    }

    #[test]
    fn test_checked_reads() {
        let cache = build_cache(20).unwrap();
        assert_eq!(is_prime(&cache, 17), Ok(true));
        assert_eq!(divisor_class(&cache, 15), Ok(5));
        assert_eq!(layout_points(&cache, 3).unwrap().len(), 3);
        // past the built range: defaults, not errors
        assert_eq!(is_prime(&cache, 23), Ok(false));
        assert_eq!(layout_points(&cache, 99).unwrap().len(), 0);

        assert!(is_prime(&cache, -2).is_err());
        assert!(divisor_class(&cache, -2).is_err());
        assert!(layout_points(&cache, -2).is_err());
    }

    #[test]
    fn test_full_lengths_follow_max_tier() {
        let cache = build_cache(30).unwrap();
        let uniforms = pack_full(&cache);
        assert_eq!(uniforms.primality.len(), 30);
        assert_eq!(uniforms.divisor_class.len(), 30);
        assert_eq!(uniforms.points.len(), 300);
        assert_eq!(uniforms.tier_count_used, 30);
    }
}
