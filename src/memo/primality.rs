// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primality oracle with memoized results.

use super::Memo;

/// Decides primality by trial division, caching every answer by exact value.
///
/// The same oracle serves the prime generator and the pair oracle, so values
/// tested while generating candidates are free when they show up again as
/// concatenations.
///
/// # Example
///
/// ```
/// use prime_pair_search::memo::PrimalityOracle;
///
/// let mut oracle = PrimalityOracle::new();
/// assert!(oracle.is_prime(37));
/// assert!(oracle.is_prime(73));
/// assert!(!oracle.is_prime(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimalityOracle {
    memo: Memo<u64, bool>,
}

impl PrimalityOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `n` is prime.
    pub fn is_prime(&mut self, n: u64) -> bool {
        self.memo.get_or_insert_with(n, trial_division)
    }

    /// Number of distinct values tested so far.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.memo.hits()
    }

    pub fn misses(&self) -> u64 {
        self.memo.misses()
    }
}

/// Uncached primality test.
///
/// Divides by odd `i` while `i <= n / i`, which bounds `i` by the exact
/// integer square root without computing a square or a float root.
pub fn trial_division(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
