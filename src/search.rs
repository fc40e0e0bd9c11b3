// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running a complete search and reducing its results.
//!
//! [`find_combinations`] runs the predicate program over a candidate list.
//! [`run_search`] is the entry point used by the command line: it generates
//! the candidates, runs the search, and reduces every combination found to
//! the minimum sum.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{SearchConfig, MAX_SIZE};
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::{ConfigError, SearchError};
use crate::memo::{PairOracle, PrimeSequence};
use crate::predicates::{CollectPredicate, CombinationPredicate, FailPredicate};
use crate::state::{Combination, Statistics};

/// Final answer of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The lowest sum, and the first combination found with that sum.
    Found { min_sum: u64, combination: Combination },
    /// No combination of the requested size exists below the bound.
    NoSolution,
}

impl SearchOutcome {
    /// Reduce `combinations` to the one with the lowest sum.
    ///
    /// Ties go to the combination found first.
    pub fn from_combinations(combinations: &[Combination]) -> Self {
        let mut best: Option<&Combination> = None;
        for combination in combinations {
            if best.map_or(true, |b| combination.sum() < b.sum()) {
                best = Some(combination);
            }
        }
        match best {
            Some(combination) => SearchOutcome::Found {
                min_sum: combination.sum(),
                combination: combination.clone(),
            },
            None => SearchOutcome::NoSolution,
        }
    }

    pub fn min_sum(&self) -> Option<u64> {
        match self {
            SearchOutcome::Found { min_sum, .. } => Some(*min_sum),
            SearchOutcome::NoSolution => None,
        }
    }
}

/// Everything a search run produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub config: SearchConfig,
    pub outcome: SearchOutcome,
    /// Wall-clock time from prime generation to reduction.
    pub elapsed: Duration,
    /// Number of candidate primes.
    pub prime_count: usize,
    /// Every valid combination, in discovery order.
    pub combinations: Vec<Combination>,
    pub statistics: Statistics,
    /// Distinct values tested for primality.
    pub primality_cache_size: usize,
    /// Distinct pairs tested for compatibility.
    pub pair_cache_size: usize,
}

/// Every order-preserving subset of `size` candidates whose members are
/// pairwise compatible.
///
/// `size == 0` yields exactly one empty combination. An empty candidate list
/// with `size > 0` yields none.
///
/// # Example
///
/// ```
/// use prime_pair_search::memo::{PairOracle, PrimeSequence};
/// use prime_pair_search::search::find_combinations;
///
/// let mut oracle = PairOracle::new();
/// let primes = PrimeSequence::generate(1000, oracle.primality_mut());
/// let found = find_combinations(4, primes, oracle).unwrap();
/// assert!(found.iter().any(|c| c.sorted() == vec![3, 7, 109, 673]));
/// ```
pub fn find_combinations(
    size: usize,
    candidates: PrimeSequence,
    oracle: PairOracle,
) -> Result<Vec<Combination>, SearchError> {
    if size > MAX_SIZE {
        return Err(ConfigError::SizeTooLarge {
            size,
            max: MAX_SIZE,
        }
        .into());
    }
    let mut ctx = SearchContext::new(candidates, size, oracle);
    run_engine(&mut ctx)?;
    Ok(ctx.results)
}

/// Run the combination program to exhaustion on `ctx`.
fn run_engine(ctx: &mut SearchContext) -> Result<(), SearchError> {
    let engine = EngineBuilder::new()
        .add(Box::new(CombinationPredicate::new()))
        .add(Box::new(CollectPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    match engine.search(ctx) {
        None => Ok(()),
        Some(suspended) => {
            debug!("Search suspended at depth {}", suspended.depth());
            Err(ctx.take_fault().unwrap_or(SearchError::Interrupted))
        }
    }
}

/// Generate candidates, search, and reduce to the minimum sum.
pub fn run_search(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    config.validate()?;
    info!(
        "Searching for {} primes up to {} with pairwise prime concatenations",
        config.size, config.bound
    );

    let start = Instant::now();

    let mut oracle = PairOracle::new();
    let candidates = PrimeSequence::generate(config.bound, oracle.primality_mut());
    info!("Generated {} candidate primes", candidates.len());

    let prime_count = candidates.len();
    let mut ctx = SearchContext::new(candidates, config.size, oracle);
    run_engine(&mut ctx)?;

    let outcome = SearchOutcome::from_combinations(&ctx.results);
    let elapsed = start.elapsed();

    info!(
        "Search finished in {:.3}s with {} combinations",
        elapsed.as_secs_f64(),
        ctx.results.len()
    );
    for (name, value) in ctx.statistics.iter() {
        debug!("{}: {}", name, value);
    }
    debug!(
        "Primality cache: {} entries ({} hits); pair cache: {} entries ({} hits)",
        ctx.oracle.primality().len(),
        ctx.oracle.primality().hits(),
        ctx.oracle.len(),
        ctx.oracle.hits()
    );

    Ok(SearchReport {
        config: *config,
        outcome,
        elapsed,
        prime_count,
        primality_cache_size: ctx.oracle.primality().len(),
        pair_cache_size: ctx.oracle.len(),
        statistics: ctx.statistics.clone(),
        combinations: std::mem::take(&mut ctx.results),
    })
}
