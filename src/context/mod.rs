// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): candidate primes and target size, plus the cached oracles
//! - Tier 2 (DYNAMIC): the current selection, with trail-based backtracking
//!
//! It also carries the outputs of a search: collected combinations,
//! statistics, and the first arithmetic fault, if any.

mod dynamic;
mod memoized;

pub use dynamic::{Cell, DynamicState, CELLS_PER_SELECTION};
pub use memoized::MemoizedData;

use crate::error::SearchError;
use crate::memo::{PairOracle, PrimeSequence};
use crate::state::statistics::Statistics;
use crate::state::Combination;
use crate::trail::Trail;

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,   // Tier 1: candidates + target, immutable
///     oracle: PairOracle,   // Tier 1: caches, grow but never change
///     trail: Trail,         // Tier 2: undo log
///     state: DynamicState,  // Tier 2: selection
///     statistics, results, fault  // outputs
/// }
/// ```
///
/// # Example
///
/// ```
/// use prime_pair_search::context::SearchContext;
/// use prime_pair_search::memo::{PairOracle, PrimeSequence};
///
/// let mut oracle = PairOracle::new();
/// let primes = PrimeSequence::generate(10, oracle.primality_mut());
/// let mut ctx = SearchContext::new(primes, 2, oracle);
///
/// let checkpoint = ctx.trail.len();
/// ctx.select(3);
/// ctx.select(7);
/// assert_eq!(ctx.selection(), &[3, 7]);
/// assert_eq!(ctx.selection_sum(), 10);
///
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.selection().is_empty());
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable search inputs (Tier 1)
    pub memo: MemoizedData,
    /// Cached primality and pair oracles (Tier 1)
    pub oracle: PairOracle,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Counters incremented by predicates
    pub statistics: Statistics,
    /// Combinations recorded by the search, in discovery order
    pub results: Vec<Combination>,
    /// First error raised inside a predicate
    fault: Option<SearchError>,
}

impl SearchContext {
    /// Create a search context over `candidates` for combinations of `target` primes.
    pub fn new(candidates: PrimeSequence, target: usize, oracle: PairOracle) -> Self {
        Self::with_memo(MemoizedData::new(candidates, target), oracle)
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData, oracle: PairOracle) -> Self {
        let state = DynamicState::new(&memo);
        Self {
            memo,
            oracle,
            trail: Trail::new(),
            state,
            statistics: Statistics::new(),
            results: Vec::new(),
            fault: None,
        }
    }

    pub fn candidates(&self) -> &PrimeSequence {
        &self.memo.candidates
    }

    pub fn target(&self) -> usize {
        self.memo.target
    }

    /// Restore all DYNAMIC state to the given trail position.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(&mut self.state.cells, checkpoint);
    }

    /// Set a cell with trail recording.
    pub fn set_cell(&mut self, cell: Cell, value: u64) {
        self.trail.set(&mut self.state.cells, cell as usize, value);
    }

    /// Append `prime` to the selection (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if the selection is already full.
    pub fn select(&mut self, prime: u64) {
        let len = self.selection_len();
        assert!(
            len < self.state.selection.len(),
            "Selection overflow: already holds {} primes",
            len
        );
        self.state.selection[len] = prime;
        let sum = self.selection_sum() + prime;
        self.set_cell(Cell::SelectionLen, len as u64 + 1);
        self.set_cell(Cell::SelectionSum, sum);
    }

    /// The primes selected on the current branch, in selection order.
    pub fn selection(&self) -> &[u64] {
        &self.state.selection[..self.selection_len()]
    }

    pub fn selection_len(&self) -> usize {
        self.state.get(Cell::SelectionLen) as usize
    }

    pub fn selection_sum(&self) -> u64 {
        self.state.get(Cell::SelectionSum)
    }

    /// Record an error raised inside a predicate. The first fault wins.
    pub fn record_fault(&mut self, error: SearchError) {
        if self.fault.is_none() {
            self.fault = Some(error);
        }
    }

    pub fn take_fault(&mut self) -> Option<SearchError> {
        self.fault.take()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::with_memo(MemoizedData::default(), PairOracle::new())
    }
}
