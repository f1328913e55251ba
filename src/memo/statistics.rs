// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! A read-only summary of a built [`CacheStore`], for logging and debugging.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::geometry::Tier;
use crate::memo::divisors::DivisorClass;
use crate::memo::store::CacheStore;

/// Number of entries held by each cached mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheSizes {
    pub primality: usize,
    pub divisor_class: usize,
    pub layout_points: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub max_tier: Tier,
    pub prime_count: usize,
    pub total_layout_points: usize,
    pub cache_sizes: CacheSizes,

    /// Tier count per divisor value (0 for tiers no listed prime divides).
    /// Every class appears, even with a zero count.
    pub divisor_histogram: BTreeMap<u32, usize>,
}

impl CacheStats {
    pub(crate) fn collect(cache: &CacheStore) -> Self {
        let mut divisor_histogram: BTreeMap<u32, usize> =
            DivisorClass::iter().map(|class| (class.value(), 0)).collect();
        for tier in cache.tiers() {
            *divisor_histogram
                .entry(cache.divisor_class(tier))
                .or_insert(0) += 1;
        }

        let tier_count = cache.tier_count();
        Self {
            max_tier: cache.max_tier(),
            prime_count: cache.prime_count(),
            total_layout_points: cache.total_layout_points(),
            cache_sizes: CacheSizes {
                primality: tier_count,
                divisor_class: tier_count,
                layout_points: tier_count,
            },
            divisor_histogram,
        }
    }

    /// Tiers classified under `class`.
    pub fn tiers_with(&self, class: DivisorClass) -> usize {
        self.divisor_histogram
            .get(&class.value())
            .copied()
            .unwrap_or(0)
    }
}
