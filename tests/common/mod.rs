// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use prime_pair_search::context::SearchContext;
use prime_pair_search::memo::{PairOracle, PrimeSequence};
use prime_pair_search::{Predicate, PredicateResult};

/// The lowest-sum set of five primes below 10000.
pub const FIVE_PRIME_SOLUTION: [u64; 5] = [13, 5197, 5701, 6733, 8389];

/// A search context over the primes up to `bound`, for sets of `target` primes.
pub fn context(bound: u64, target: usize) -> SearchContext {
    let mut oracle = PairOracle::new();
    let primes = PrimeSequence::generate(bound, oracle.primality_mut());
    SearchContext::new(primes, target, oracle)
}

/// Whether every pair in `primes` concatenates to primes in both orders.
pub fn pairwise_compatible(oracle: &mut PairOracle, primes: &[u64]) -> bool {
    primes.iter().enumerate().all(|(i, &a)| {
        primes[i + 1..]
            .iter()
            .all(|&b| oracle.compatible(a, b).unwrap_or(false))
    })
}

/// Selects each value of `start..end` in turn, one choice per value.
#[derive(Debug)]
pub struct SelectRangePredicate {
    start: u64,
    end: u64,
}

impl SelectRangePredicate {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

impl Predicate for SelectRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match self.end.saturating_sub(self.start) {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n as usize),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.select(self.start + choice as u64);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SelectRange"
    }
}

/// Succeeds `rounds` times via SuccessSamePredicate, then advances.
#[derive(Debug)]
pub struct MultiRoundPredicate {
    rounds: usize,
}

impl MultiRoundPredicate {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else if round + 1 == self.rounds {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

/// Fails unless the selection sums to `sum`.
#[derive(Debug)]
pub struct SumIsPredicate(pub u64);

impl Predicate for SumIsPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.selection_sum() == self.0 {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "SumIs"
    }
}
