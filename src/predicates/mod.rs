// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `combination`: CombinationPredicate, the take/skip choice over candidates
//! - `collect`: CollectPredicate, records each completed selection
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! A full search is the program
//! `CombinationPredicate -> CollectPredicate -> FailPredicate`:
//! the terminal failure forces the engine to backtrack through every choice.

pub mod collect;
pub mod combination;

pub use collect::CollectPredicate;
pub use combination::CombinationPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use prime_pair_search::engine::EngineBuilder;
/// use prime_pair_search::predicates::{CollectPredicate, CombinationPredicate, FailPredicate};
/// use prime_pair_search::context::SearchContext;
///
/// // Zero primes wanted: exactly one (empty) combination.
/// let mut ctx = SearchContext::default();
/// let engine = EngineBuilder::new()
///     .add(Box::new(CombinationPredicate::new()))
///     .add(Box::new(CollectPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.results.len(), 1);
/// assert!(ctx.results[0].is_empty());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Returns control to the caller with the search state intact; the caller
/// can inspect the context and resume the engine.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_predicate() {
        let mut ctx = SearchContext::default();
        assert_eq!(FailPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(FailPredicate.name(), "Fail");
    }

    #[test]
    fn test_suspend_predicate() {
        let mut ctx = SearchContext::default();
        assert_eq!(SuspendPredicate.try_pred(&mut ctx, 0), PredicateResult::Suspend);
    }
}
