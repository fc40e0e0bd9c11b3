// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for sets of primes whose pairwise concatenations are all prime.
//!
//! Given a bound and a set size *k*, find every set of *k* primes below the
//! bound such that for any two members `a` and `b`, both `a ++ b` and
//! `b ++ a` (decimal concatenation) are prime, and report the lowest sum.
//! For k = 5 below 10000 the answer is 26033, from {13, 5197, 5701, 6733, 8389}.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data
//!
//! Data that never changes once computed:
//! - The ascending candidate prime sequence and the target size
//! - Memoized primality results, keyed by exact value
//! - Memoized pair compatibility results, keyed by the canonical (min, max) pair
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Selection - the primes chosen on the current branch
//!
//! # Search Algorithm
//!
//! The search is a predicate program run by a backtracking engine:
//!
//! 1. **CombinationPredicate**: for each candidate in order, take it (only if
//!    compatible with everything already taken) or skip it
//! 2. **CollectPredicate**: record the complete selection
//! 3. **FailPredicate**: force backtracking so every branch is explored
//!
//! The engine keeps its own explicit stack, so search depth is independent of
//! the host call stack.
//!
//! # Example
//!
//! ```
//! use prime_pair_search::config::SearchConfig;
//! use prime_pair_search::search::run_search;
//!
//! let report = run_search(&SearchConfig::new(1000, 4)).unwrap();
//! assert_eq!(report.outcome.min_sum(), Some(792)); // {3, 7, 109, 673}
//! ```

pub mod arith;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod memo;
pub mod predicates;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{ConfigError, SearchError};
pub use search::{find_combinations, run_search, SearchOutcome, SearchReport};
pub use trail::Trail;
