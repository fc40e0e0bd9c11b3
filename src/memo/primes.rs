// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ascending sequence of candidate primes.

use super::PrimalityOracle;
use std::ops::Index;
use tracing::debug;

/// All primes up to an inclusive bound, strictly ascending.
///
/// Immutable once generated; the search only iterates and indexes it.
///
/// # Example
///
/// ```
/// use prime_pair_search::memo::{PrimalityOracle, PrimeSequence};
///
/// let mut oracle = PrimalityOracle::new();
/// let primes = PrimeSequence::generate(20, &mut oracle);
/// assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeSequence {
    primes: Vec<u64>,
}

/// Odd numbers from 3 up to and including `bound`, ascending.
fn odd_candidates(bound: u64) -> impl DoubleEndedIterator<Item = u64> {
    (1..=bound.saturating_sub(1) / 2).map(|i| 2 * i + 1)
}

impl PrimeSequence {
    /// Generate every prime `<= bound`, testing odd candidates through `oracle`.
    ///
    /// A bound below 2 gives an empty sequence.
    pub fn generate(bound: u64, oracle: &mut PrimalityOracle) -> Self {
        let mut primes = Vec::new();
        if bound >= 2 {
            primes.push(2);
        }
        primes.extend(odd_candidates(bound).filter(|&n| oracle.is_prime(n)));

        debug!(
            "Generated {} primes up to {} (largest {:?})",
            primes.len(),
            bound,
            primes.last()
        );

        Self { primes }
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.primes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }
}

impl Index<usize> for PrimeSequence {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.primes[index]
    }
}

impl From<PrimeSequence> for Vec<u64> {
    fn from(sequence: PrimeSequence) -> Self {
        sequence.primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::primality::trial_division;

    fn generate(bound: u64) -> PrimeSequence {
        PrimeSequence::generate(bound, &mut PrimalityOracle::new())
    }

    #[test]
    fn test_odd_candidates() {
        assert_eq!(odd_candidates(0).count(), 0);
        assert_eq!(odd_candidates(2).count(), 0);
        assert_eq!(odd_candidates(3).collect::<Vec<_>>(), vec![3]);
        assert_eq!(odd_candidates(10).collect::<Vec<_>>(), vec![3, 5, 7, 9]);
        assert_eq!(odd_candidates(11).next_back(), Some(11));
    }

    #[test]
    fn test_odd_candidates_reach_u64_max() {
        assert_eq!(odd_candidates(u64::MAX).next_back(), Some(u64::MAX));
        assert_eq!(odd_candidates(u64::MAX - 1).next_back(), Some(u64::MAX - 2));
    }

    #[test]
    fn test_bound_below_two_is_empty() {
        assert!(generate(0).is_empty());
        assert!(generate(1).is_empty());
    }

    #[test]
    fn test_bound_is_inclusive() {
        assert_eq!(generate(2).as_slice(), &[2]);
        assert_eq!(generate(3).as_slice(), &[2, 3]);
        assert_eq!(generate(4).as_slice(), &[2, 3]);
        assert_eq!(generate(97).get(24), Some(97));
    }

    #[test]
    fn test_primes_to_100() {
        let expected = [
            2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
            79, 83, 89, 97,
        ];
        assert_eq!(generate(100).as_slice(), &expected);
    }

    #[test]
    fn test_strictly_ascending_and_sound() {
        let primes = generate(10_000);
        assert_eq!(primes.len(), 1229);
        assert!(primes.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(primes.iter().all(trial_division));
        assert!(primes.contains(5197));
        assert!(!primes.contains(5199));
    }

    #[test]
    fn test_generation_populates_oracle() {
        let mut oracle = PrimalityOracle::new();
        let primes = PrimeSequence::generate(50, &mut oracle);
        let misses = oracle.misses();
        for p in primes.iter().skip(1) {
            assert!(oracle.is_prime(p));
        }
        assert_eq!(oracle.misses(), misses);
    }
}
