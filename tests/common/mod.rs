// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

/// Primality by trial division, independent of the sieve under test.
pub fn is_prime_naive(n: usize) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Exact bit patterns of a float slice, for bit-identical comparisons.
pub fn bits(values: &[f32]) -> Vec<u32> {
    values.iter().map(|v| v.to_bits()).collect()
}

/// Split an interleaved x/y buffer into pairs.
pub fn pairs(values: &[f32]) -> Vec<(f32, f32)> {
    values.chunks_exact(2).map(|c| (c[0], c[1])).collect()
}
