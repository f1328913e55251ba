// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-length float buffers handed to the rendering binding.

use serde::Serialize;

use crate::error::{Result, RingsError};

/// A zero-filled `f32` buffer whose length is fixed at creation.
///
/// Packers write into it by index; entries never written stay `0.0`. The
/// length cannot change afterwards, which keeps it matched to the uniform
/// array it feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PackedBuffer(Vec<f32>);

impl PackedBuffer {
    /// Create a buffer of `len` zeros.
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    /// Checked read for signed indices coming from outside the crate.
    pub fn value_at(&self, index: i64) -> Result<f32> {
        let index = RingsError::non_negative("index", index)?;
        self.get(index).ok_or(RingsError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Write `value` at `index`; writes past the end are dropped.
    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.0
    }
}

impl AsRef<[f32]> for PackedBuffer {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}
