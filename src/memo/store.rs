// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cache store: all per-tier data, built once.
//!
//! # Lifecycle
//!
//! ```text
//! CacheStore::build(max_tier)   // sieve once, then classify + lay out each tier
//!     ├── is_prime(tier)        // read-only from here on
//!     ├── divisor_class(tier)
//!     └── layout_points(tier)
//! CacheStore::rebuild(max_tier) // replaces every mapping wholesale
//! ```
//!
//! Tiers `MIN_TIER..=max_tier` are cached. Reads outside that range return
//! `false`, `0` or an empty slice, so packers can loop over fixed tier ranges
//! without checking the built range first.

use log::{debug, info};

use crate::geometry::constants::{DEFAULT_MAX_TIER, MIN_TIER};
use crate::geometry::{LayoutPoint, Tier};
use crate::memo::divisors::highest_priority_divisor;
use crate::memo::layout::compute_layout_points;
use crate::memo::sieve::generate_prime_sieve;
use crate::memo::statistics::CacheStats;

/// Precomputed primality, divisor class and layout points per tier.
///
/// Each vector is indexed by `tier - MIN_TIER`.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStore {
    max_tier: Tier,
    primality: Vec<bool>,
    divisor_classes: Vec<u32>,
    layouts: Vec<Vec<LayoutPoint>>,
}

impl CacheStore {
    /// Build the store for the default range `MIN_TIER..=DEFAULT_MAX_TIER`.
    pub fn new() -> Self {
        Self::build(DEFAULT_MAX_TIER)
    }

    /// Build the store for tiers `MIN_TIER..=max_tier`.
    ///
    /// The sieve runs once over `0..=max_tier`; each tier is then classified
    /// and laid out in ascending order. A `max_tier` below `MIN_TIER` gives an
    /// empty store.
    pub fn build(max_tier: Tier) -> Self {
        debug!("[CacheStore] Sieving primes up to {}...", max_tier);
        let sieve = generate_prime_sieve(max_tier);

        let tier_count = (max_tier + 1).saturating_sub(MIN_TIER);
        let mut primality = Vec::with_capacity(tier_count);
        let mut divisor_classes = Vec::with_capacity(tier_count);
        let mut layouts = Vec::with_capacity(tier_count);

        debug!("[CacheStore] Classifying and laying out {} tiers...", tier_count);
        for tier in MIN_TIER..=max_tier {
            primality.push(sieve[tier]);
            divisor_classes.push(highest_priority_divisor(tier as u64));
            layouts.push(compute_layout_points(tier));
        }

        let store = Self {
            max_tier,
            primality,
            divisor_classes,
            layouts,
        };

        info!(
            "[CacheStore] Built {} tiers ({} primes, {} layout points)",
            store.tier_count(),
            store.prime_count(),
            store.total_layout_points()
        );

        store
    }

    /// Discard all cached data and build again for `max_tier`.
    ///
    /// Rebuilding with an unchanged `max_tier` yields an identical store.
    pub fn rebuild(&mut self, max_tier: Tier) {
        *self = Self::build(max_tier);
    }

    /// Highest tier the store was built for.
    pub fn max_tier(&self) -> Tier {
        self.max_tier
    }

    /// Number of cached tiers.
    pub fn tier_count(&self) -> usize {
        self.primality.len()
    }

    /// Whether `tier` is prime; `false` outside the built range.
    #[inline]
    pub fn is_prime(&self, tier: Tier) -> bool {
        self.slot(tier)
            .map(|i| self.primality[i])
            .unwrap_or(false)
    }

    /// Highest-priority small prime dividing `tier`; 0 outside the built range.
    #[inline]
    pub fn divisor_class(&self, tier: Tier) -> u32 {
        self.slot(tier)
            .map(|i| self.divisor_classes[i])
            .unwrap_or(0)
    }

    /// Layout points of `tier`; empty outside the built range.
    #[inline]
    pub fn layout_points(&self, tier: Tier) -> &[LayoutPoint] {
        self.slot(tier)
            .map(|i| self.layouts[i].as_slice())
            .unwrap_or(&[])
    }

    /// Number of prime tiers in the store.
    pub fn prime_count(&self) -> usize {
        self.primality.iter().filter(|&&prime| prime).count()
    }

    /// Sum of layout point counts over all tiers.
    pub fn total_layout_points(&self) -> usize {
        self.layouts.iter().map(Vec::len).sum()
    }

    /// Diagnostic summary of the store.
    pub fn stats(&self) -> CacheStats {
        CacheStats::collect(self)
    }

    /// Iterate over all cached tiers in ascending order.
    pub fn tiers(&self) -> impl Iterator<Item = Tier> {
        MIN_TIER..MIN_TIER + self.tier_count()
    }

    fn slot(&self, tier: Tier) -> Option<usize> {
        tier.checked_sub(MIN_TIER)
            .filter(|&i| i < self.primality.len())
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::MAX_LAYOUT_POINTS;

    #[test]
    fn test_default_range() {
        let cache = CacheStore::new();
        assert_eq!(cache.max_tier(), 150);
        assert_eq!(cache.tier_count(), 149);
        assert_eq!(cache.tiers().next(), Some(2));
        assert_eq!(cache.tiers().last(), Some(150));
    }

    #[test]
    fn test_max_tier_is_inclusive() {
        let cache = CacheStore::build(13);
        assert!(cache.is_prime(13));
        assert_eq!(cache.divisor_class(13), 13);
        assert_eq!(cache.layout_points(13).len(), 13);
    }

    #[test]
    fn test_out_of_range_defaults() {
        let cache = CacheStore::build(20);
        for tier in [0, 1, 21, 1000] {
            assert!(!cache.is_prime(tier));
            assert_eq!(cache.divisor_class(tier), 0);
            assert!(cache.layout_points(tier).is_empty());
        }
    }

    #[test]
    fn test_accessors_match_generators() {
        let cache = CacheStore::build(60);
        let sieve = generate_prime_sieve(60);
        for tier in cache.tiers() {
            assert_eq!(cache.is_prime(tier), sieve[tier]);
            assert_eq!(
                cache.divisor_class(tier),
                highest_priority_divisor(tier as u64)
            );
            assert_eq!(cache.layout_points(tier), compute_layout_points(tier));
        }
    }

    #[test]
    fn test_counts() {
        let cache = CacheStore::build(10);
        // 2, 3, 5, 7
        assert_eq!(cache.prime_count(), 4);
        // 2 + 3 + ... + 10
        assert_eq!(cache.total_layout_points(), 54);

        let cache = CacheStore::build(150);
        let expected: usize = (2..=150).map(|t: usize| t.min(MAX_LAYOUT_POINTS)).sum();
        assert_eq!(cache.total_layout_points(), expected);
    }

    #[test]
    fn test_tiny_ranges_are_empty() {
        for max_tier in [0, 1] {
            let cache = CacheStore::build(max_tier);
            assert_eq!(cache.tier_count(), 0);
            assert_eq!(cache.prime_count(), 0);
            assert_eq!(cache.tiers().count(), 0);
        }
    }

    #[test]
    fn test_rebuild_replaces_and_is_idempotent() {
        let mut cache = CacheStore::build(40);
        cache.rebuild(80);
        assert_eq!(cache.max_tier(), 80);
        assert!(cache.is_prime(79));
        assert_eq!(cache, CacheStore::build(80));

        cache.rebuild(80);
        assert_eq!(cache, CacheStore::build(80));

        cache.rebuild(10);
        assert!(!cache.is_prime(79));
        assert_eq!(cache.tier_count(), 9);
    }
}
