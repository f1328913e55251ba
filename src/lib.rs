// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed number-theoretic data for a ring visualization, packed into
//! fixed-size shader buffers.
//!
//! Each integer "tier" from 2 upward is one ring. For every tier the crate
//! records whether it is prime, which small prime classifies it, and where
//! its points sit on a circle of radius equal to the tier.
//!
//! # Architecture
//!
//! The implementation uses a two-phase lifecycle:
//!
//! ## Phase 1: MEMO Data (build once)
//!
//! [`CacheStore::build`] runs:
//! - One Sieve of Eratosthenes over the whole range
//! - Divisor classification against 17 > 13 > 11 > 7 > 5 > 3 > 2
//! - Radial layout, up to 50 points per tier
//!
//! ## Phase 2: Packing (repeat per frame)
//!
//! Packers read the cache and emit zero-padded `f32` buffers with fixed
//! lengths (see [`geometry::constants`]):
//! - [`FullPacker`]: primality, divisor classes, multi-point layout with end markers
//! - [`SimplePacker`]: primality, one scaled point per tier
//! - [`InteractivePacker`]: primality, animated opacity and jittered points
//!
//! Packers never mutate the cache. Rebuilding for a different range replaces
//! the cache wholesale via [`CacheStore::rebuild`].
//!
//! # Example
//!
//! ```
//! use prime_rings::api;
//! use prime_rings::geometry::Pointer;
//!
//! let cache = api::build_cache(150).unwrap();
//! let simple = api::pack_simple(&cache);
//! assert_eq!(simple.primality.get(7), Some(1.0));
//!
//! let frame = api::pack_interactive(&cache, 0.0, Pointer::default());
//! assert_eq!(frame.points.len(), 100);
//! ```

pub mod api;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod pack;

// Re-export commonly used types
pub use error::{Result, RingsError};
pub use geometry::{LayoutPoint, Pointer, Tier};
pub use memo::{CacheStats, CacheStore, DivisorClass};
pub use pack::{FullPacker, InteractivePacker, PackedBuffer, Packer, SimplePacker};
