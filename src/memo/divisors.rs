// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Divisor classification of tiers.
//!
//! Each tier is labelled with the first entry of [`PRIORITY_DIVISORS`] that
//! divides it. The label drives color selection in the consuming shader.
//!
//! # Example
//!
//! - 34 = 2 × 17 → 17 (17 outranks 2)
//! - 9 = 3 × 3 → 3
//! - 23 → 0 (no listed prime divides it)

use crate::geometry::constants::PRIORITY_DIVISORS;
use serde::Serialize;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Return the highest-priority small prime dividing `n`, or 0 if none does.
///
/// Priority runs 17 > 13 > 11 > 7 > 5 > 3 > 2; the scan stops at the first
/// match, so the result is never a product of several listed primes.
pub fn highest_priority_divisor(n: u64) -> u32 {
    PRIORITY_DIVISORS
        .iter()
        .copied()
        .find(|&p| n % u64::from(p) == 0)
        .unwrap_or(0)
}

/// Divisor class of a tier as an enum.
///
/// Discriminants equal the divisor value, with `None` for 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumIter, EnumCountMacro,
)]
#[repr(u8)]
pub enum DivisorClass {
    #[default]
    None = 0,
    Two = 2,
    Three = 3,
    Five = 5,
    Seven = 7,
    Eleven = 11,
    Thirteen = 13,
    Seventeen = 17,
}

impl DivisorClass {
    /// Classify `n` by its highest-priority divisor.
    pub fn of(n: u64) -> Self {
        Self::from_value(highest_priority_divisor(n)).unwrap_or_default()
    }

    /// Map a divisor value (0, 2, 3, ... 17) back to its class.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            5 => Some(Self::Five),
            7 => Some(Self::Seven),
            11 => Some(Self::Eleven),
            13 => Some(Self::Thirteen),
            17 => Some(Self::Seventeen),
            _ => None,
        }
    }

    /// The divisor value, 0 for [`DivisorClass::None`].
    pub fn value(self) -> u32 {
        self as u32
    }
}
