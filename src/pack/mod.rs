// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Buffer packers: flatten cached tier data into fixed-length float buffers.
//!
//! Three variants, all read-only over a built [`CacheStore`]:
//! - [`FullPacker`]: primality, divisor classes, up to 10 points per tier
//!   with end markers in a 300-float budget
//! - [`SimplePacker`]: primality and one half-scale point per tier
//! - [`InteractivePacker`]: primality, time-varying opacity and jittered
//!   points for one animation frame
//!
//! A packer never mutates the cache, so the same cache can feed any number of
//! packer calls, one per frame or from several readers at once.

pub mod buffer;
pub mod full;
pub mod interactive;
pub mod simple;

pub use buffer::PackedBuffer;
pub use full::{FullPacker, FullUniforms};
pub use interactive::{InteractivePacker, InteractiveUniforms};
pub use simple::{SimplePacker, SimpleUniforms};

use crate::memo::CacheStore;

/// A transformation from the cache to a set of shader buffers.
///
/// Implementations hold their own budgets (and, for the interactive packer,
/// frame inputs) as fields. `pack` must be a pure function of `self` and the
/// cache.
pub trait Packer {
    type Output;

    fn pack(&self, cache: &CacheStore) -> Self::Output;
}
