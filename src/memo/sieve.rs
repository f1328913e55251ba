// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes.
//!
//! The sieve is run once over the whole cached range when the
//! [`CacheStore`](crate::memo::CacheStore) is built, rather than testing each
//! tier separately.

use crate::error::{Result, RingsError};

/// Compute a primality table for `0..=limit`.
///
/// Entry `n` is `true` iff `n` is prime. The returned vector always has
/// `limit + 1` entries; indices 0 and 1 are `false`.
///
/// # Algorithm
///
/// For each `i` with `i * i <= limit` that is still marked prime, mark every
/// multiple of `i` from `i * i` upward as composite.
pub fn generate_prime_sieve(limit: usize) -> Vec<bool> {
    let mut sieve = vec![true; limit + 1];
    sieve[0] = false;
    if limit >= 1 {
        sieve[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if sieve[i] {
            for multiple in (i * i..=limit).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    sieve
}

/// Checked variant of [`generate_prime_sieve`] for signed input.
///
/// Returns [`RingsError::InvalidArgument`] when `limit` is negative.
pub fn try_generate_prime_sieve(limit: i64) -> Result<Vec<bool>> {
    let limit = RingsError::non_negative("limit", limit)?;
    Ok(generate_prime_sieve(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime_by_trial_division(n: usize) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_sieve_length() {
        assert_eq!(generate_prime_sieve(0).len(), 1);
        assert_eq!(generate_prime_sieve(1).len(), 2);
        assert_eq!(generate_prime_sieve(150).len(), 151);
    }

    #[test]
    fn test_zero_and_one_not_prime() {
        let sieve = generate_prime_sieve(1);
        assert!(!sieve[0]);
        assert!(!sieve[1]);
        assert_eq!(generate_prime_sieve(0), vec![false]);
    }

    #[test]
    fn test_small_primes() {
        let sieve = generate_prime_sieve(30);
        let primes: Vec<usize> = (0..=30).filter(|&n| sieve[n]).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_matches_trial_division() {
        let limit = 1000;
        let sieve = generate_prime_sieve(limit);
        for n in 0..=limit {
            assert_eq!(sieve[n], is_prime_by_trial_division(n), "n = {}", n);
        }
    }

    #[test]
    fn test_perfect_square_limit() {
        // 49 = 7 * 7 must be struck when the limit is exactly 49
        let sieve = generate_prime_sieve(49);
        assert!(!sieve[49]);
        assert!(sieve[47]);
    }

    #[test]
    fn test_prime_count_up_to_150() {
        let sieve = generate_prime_sieve(150);
        assert_eq!(sieve.iter().filter(|&&p| p).count(), 35);
    }

    #[test]
    fn test_try_generate_rejects_negative() {
        assert_eq!(
            try_generate_prime_sieve(-1),
            Err(RingsError::InvalidArgument {
                name: "limit",
                value: -1
            })
        );
        assert_eq!(try_generate_prime_sieve(10).unwrap().len(), 11);
    }
}
