// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CombinationPredicate - chooses, for each candidate in turn, whether to take it.
//!
//! Round `r` decides candidate `r` of the ascending prime sequence. A
//! candidate may only be taken when it is compatible with every prime
//! already selected, so an incompatible prefix is abandoned as soon as it
//! appears instead of after the full combination has been built.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Choice index that takes the candidate when taking is allowed.
const TAKE: usize = 0;

/// Enumerates every order-preserving, pairwise-compatible selection of
/// `ctx.target()` candidates.
///
/// # Rounds
///
/// For round `r`:
/// - selection full: Success (a complete combination)
/// - no candidates left: Failure
/// - too few candidates left to fill the selection: Failure
/// - candidate compatible with the selection: Choices(2), take then skip
/// - otherwise: Choices(1), skip only
///
/// Both choices continue with round `r + 1` via SuccessSamePredicate. An
/// arithmetic error while checking compatibility is recorded on the context
/// and suspends the engine.
#[derive(Debug, Default)]
pub struct CombinationPredicate {
    /// Whether the candidate of each round may be taken, as decided by the
    /// latest try_pred of that round.
    takeable: Vec<bool>,
}

impl CombinationPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_takeable(&mut self, round: usize, takeable: bool) {
        if self.takeable.len() <= round {
            self.takeable.resize(round + 1, false);
        }
        self.takeable[round] = takeable;
    }
}

impl Predicate for CombinationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let selected = ctx.selection_len();
        let target = ctx.target();
        if selected == target {
            return PredicateResult::Success;
        }

        let remaining = ctx.candidates().len().saturating_sub(round);
        if remaining == 0 {
            return PredicateResult::Failure;
        }
        if remaining < target - selected {
            ctx.statistics.increment_counter(Counters::ExhaustedSuffixes);
            return PredicateResult::Failure;
        }

        let head = ctx.candidates()[round];
        let selection = &ctx.state.selection[..selected];
        match ctx.oracle.compatible_with_all(head, selection) {
            Ok(true) => {
                self.set_takeable(round, true);
                PredicateResult::Choices(2)
            }
            Ok(false) => {
                ctx.statistics.increment_counter(Counters::IncompatibleHeads);
                self.set_takeable(round, false);
                PredicateResult::Choices(1)
            }
            Err(error) => {
                ctx.record_fault(error);
                PredicateResult::Suspend
            }
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        debug_assert!(
            round < self.takeable.len(),
            "retry_pred for round {} before try_pred",
            round
        );
        if choice == TAKE && self.takeable[round] {
            let head = ctx.candidates()[round];
            ctx.select(head);
        }
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Combination"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::memo::{PairOracle, PrimeSequence};

    /// Candidates 2, 3, 5, 7.
    fn context(target: usize) -> SearchContext {
        let mut oracle = PairOracle::new();
        let primes = PrimeSequence::generate(7, oracle.primality_mut());
        SearchContext::new(primes, target, oracle)
    }

    #[test]
    fn test_full_selection_succeeds() {
        let mut ctx = context(1);
        let mut pred = CombinationPredicate::new();
        ctx.select(3);
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Success);
    }

    #[test]
    fn test_zero_target_succeeds_on_empty_candidates() {
        let mut ctx = SearchContext::default();
        let mut pred = CombinationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
    }

    #[test]
    fn test_end_of_candidates_fails() {
        let mut ctx = context(2);
        let mut pred = CombinationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 4), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::ExhaustedSuffixes), 0);
    }

    #[test]
    fn test_short_suffix_is_pruned() {
        let mut ctx = context(3);
        let mut pred = CombinationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::ExhaustedSuffixes), 1);
    }

    #[test]
    fn test_compatible_head_offers_take_and_skip() {
        let mut ctx = context(2);
        let mut pred = CombinationPredicate::new();
        ctx.select(3);

        // 37 and 73 are both prime.
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Choices(2));
        assert_eq!(
            pred.retry_pred(&mut ctx, 3, 0),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.selection(), &[3, 7]);
    }

    #[test]
    fn test_incompatible_head_offers_skip_only() {
        let mut ctx = context(2);
        let mut pred = CombinationPredicate::new();
        ctx.select(5);

        // 57 = 3 * 19
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Choices(1));
        assert_eq!(
            pred.retry_pred(&mut ctx, 3, 0),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.selection(), &[5]);
        assert_eq!(ctx.statistics.get(Counters::IncompatibleHeads), 1);
    }

    #[test]
    fn test_skip_leaves_selection_unchanged() {
        let mut ctx = context(2);
        let mut pred = CombinationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
        assert_eq!(
            pred.retry_pred(&mut ctx, 0, 1),
            PredicateResult::SuccessSamePredicate
        );
        assert!(ctx.selection().is_empty());
    }

    #[test]
    fn test_overflow_suspends_with_fault() {
        let candidates = PrimeSequence::generate(3, &mut Default::default());
        let mut ctx = SearchContext::new(candidates, 2, PairOracle::new());
        ctx.select(10_000_000_000_000_000_000);
        let mut pred = CombinationPredicate::new();

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert!(matches!(
            ctx.take_fault(),
            Some(SearchError::ConcatOverflow { .. })
        ));
    }
}
