// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A completed, pairwise-compatible selection of primes.

use std::fmt;

/// Primes in selection order, with their sum.
///
/// Immutable once recorded. Display sorts the primes ascending.
///
/// # Example
///
/// ```
/// use prime_pair_search::state::Combination;
///
/// let combination = Combination::new(vec![673, 109, 7, 3]);
/// assert_eq!(combination.sum(), 792);
/// assert_eq!(combination.sorted(), vec![3, 7, 109, 673]);
/// assert_eq!(combination.to_string(), "3, 7, 109, 673");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    primes: Vec<u64>,
    sum: u64,
}

impl Combination {
    pub fn new(primes: Vec<u64>) -> Self {
        let sum = primes.iter().sum();
        Self { primes, sum }
    }

    /// Primes in the order they were selected.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The primes in ascending order.
    pub fn sorted(&self) -> Vec<u64> {
        let mut primes = self.primes.clone();
        primes.sort_unstable();
        primes
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for prime in self.sorted() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", prime)?;
            first = false;
        }
        Ok(())
    }
}
