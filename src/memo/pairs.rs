// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair compatibility oracle.

use super::{Memo, PrimalityOracle};
use crate::arith::concat;
use crate::error::SearchError;

/// Decides whether two primes concatenate to primes in both digit orders.
///
/// Answers are cached under the canonical `(min, max)` key, so
/// `compatible(a, b)` and `compatible(b, a)` share one entry. The pair oracle
/// owns the primality oracle used to test the concatenations.
///
/// # Example
///
/// ```
/// use prime_pair_search::memo::PairOracle;
///
/// let mut oracle = PairOracle::new();
/// assert_eq!(oracle.compatible(3, 7), Ok(true)); // 37 and 73
/// assert_eq!(oracle.compatible(7, 3), Ok(true));
/// assert_eq!(oracle.compatible(2, 3), Ok(false)); // 23 is prime, 32 is not
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairOracle {
    primality: PrimalityOracle,
    pairs: Memo<(u64, u64), bool>,
}

impl PairOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `a ++ b` and `b ++ a` are both prime.
    pub fn compatible(&mut self, a: u64, b: u64) -> Result<bool, SearchError> {
        let key = (a.min(b), a.max(b));
        if let Some(known) = self.pairs.peek(&key) {
            self.pairs.record_hit();
            return Ok(known);
        }

        let (low, high) = key;
        let forward = concat(low, high).ok_or(SearchError::ConcatOverflow {
            left: low,
            right: high,
        })?;
        let backward = concat(high, low).ok_or(SearchError::ConcatOverflow {
            left: high,
            right: low,
        })?;
        let result = self.primality.is_prime(forward) && self.primality.is_prime(backward);

        self.pairs.insert(key, result);
        Ok(result)
    }

    /// Whether `candidate` is compatible with every prime in `selection`.
    ///
    /// Stops at the first incompatible member.
    pub fn compatible_with_all(
        &mut self,
        candidate: u64,
        selection: &[u64],
    ) -> Result<bool, SearchError> {
        for &member in selection {
            if !self.compatible(candidate, member)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn primality(&self) -> &PrimalityOracle {
        &self.primality
    }

    pub fn primality_mut(&mut self) -> &mut PrimalityOracle {
        &mut self.primality
    }

    /// Number of distinct pairs decided so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.pairs.hits()
    }

    pub fn misses(&self) -> u64 {
        self.pairs.misses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::PrimeSequence;

    const SOLUTION: [u64; 5] = [13, 5197, 5701, 6733, 8389];

    #[test]
    fn test_three_and_seven() {
        let mut oracle = PairOracle::new();
        assert_eq!(oracle.compatible(3, 7), Ok(true));
        assert!(oracle.primality_mut().is_prime(37));
        assert!(oracle.primality_mut().is_prime(73));
    }

    #[test]
    fn test_one_order_prime_is_not_enough() {
        let mut oracle = PairOracle::new();
        // 311 is prime, 113 is prime: compatible.
        assert_eq!(oracle.compatible(3, 11), Ok(true));
        // 23 is prime, 32 is not.
        assert_eq!(oracle.compatible(2, 3), Ok(false));
        // 37 is prime, 73 is prime, but 57 = 3 * 19.
        assert_eq!(oracle.compatible(5, 7), Ok(false));
    }

    #[test]
    fn test_symmetry() {
        let mut oracle = PairOracle::new();
        let primes = PrimeSequence::generate(200, oracle.primality_mut());
        for a in primes.iter() {
            for b in primes.iter() {
                assert_eq!(oracle.compatible(a, b), oracle.compatible(b, a), "{} {}", a, b);
            }
        }
    }

    #[test]
    fn test_symmetric_lookups_share_cache_entry() {
        let mut oracle = PairOracle::new();
        oracle.compatible(109, 673).unwrap();
        oracle.compatible(673, 109).unwrap();
        assert_eq!(oracle.len(), 1);
        assert_eq!(oracle.hits(), 1);
        assert_eq!(oracle.misses(), 1);
    }

    #[test]
    fn test_known_solution_is_pairwise_compatible() {
        let mut oracle = PairOracle::new();
        for (i, &a) in SOLUTION.iter().enumerate() {
            assert_eq!(oracle.compatible_with_all(a, &SOLUTION[..i]), Ok(true));
        }
    }

    #[test]
    fn test_compatible_with_empty_selection() {
        let mut oracle = PairOracle::new();
        assert_eq!(oracle.compatible_with_all(2, &[]), Ok(true));
        assert!(oracle.is_empty());
    }

    #[test]
    fn test_compatible_with_all_stops_early() {
        let mut oracle = PairOracle::new();
        assert_eq!(oracle.compatible_with_all(5, &[7, 3, 11]), Ok(false));
        assert_eq!(oracle.len(), 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut oracle = PairOracle::new();
        assert_eq!(
            oracle.compatible(3, 10_000_000_000_000_000_000),
            Err(SearchError::ConcatOverflow {
                left: 3,
                right: 10_000_000_000_000_000_000
            })
        );
        assert!(oracle.is_empty());
    }
}
