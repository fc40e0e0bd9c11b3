// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CollectPredicate - records the current selection as a combination.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Combination, Counters};
use tracing::trace;

/// Copies the selection into `ctx.results` and counts it.
///
/// Deterministic: always succeeds once. Results are outside the trail, so
/// they survive the backtracking that follows.
#[derive(Debug)]
pub struct CollectPredicate;

impl Predicate for CollectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let combination = Combination::new(ctx.selection().to_vec());
        debug_assert_eq!(combination.sum(), ctx.selection_sum());
        trace!("Found combination {} (sum {})", combination, combination.sum());

        ctx.results.push(combination);
        ctx.statistics.increment_counter(Counters::CombinationsFound);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Collect"
    }
}
