// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable search inputs (Tier 1: MEMO).

use crate::memo::PrimeSequence;

/// Immutable data fixed for the duration of a search.
///
/// The candidate list is generated once before the search and only indexed
/// afterwards. It can be cloned to start several independent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoizedData {
    /// Candidate primes, ascending.
    pub candidates: PrimeSequence,

    /// Number of primes in each combination.
    pub target: usize,
}

impl MemoizedData {
    pub fn new(candidates: PrimeSequence, target: usize) -> Self {
        Self { candidates, target }
    }
}
