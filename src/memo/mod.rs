// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data (immutable, precomputed).
//!
//! Everything here is computed once when a [`CacheStore`] is built and only
//! read afterwards:
//! - Primality table (sieve over the whole range)
//! - Divisor class per tier
//! - Radial layout points per tier

pub mod divisors;
pub mod layout;
pub mod sieve;
pub mod statistics;
pub mod store;

pub use divisors::{highest_priority_divisor, DivisorClass};
pub use layout::compute_layout_points;
pub use sieve::{generate_prime_sieve, try_generate_prime_sieve};
pub use statistics::{CacheSizes, CacheStats};
pub use store::CacheStore;
