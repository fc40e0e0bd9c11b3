// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data.
//!
//! Cached numeric oracles and the candidate prime sequence:
//! - [`Memo`]: append-only table from canonical key to result
//! - [`PrimalityOracle`]: memoized trial division
//! - [`PairOracle`]: memoized, symmetric concatenation check
//! - [`PrimeSequence`]: ascending primes up to the search bound
//!
//! Cached answers never change once computed, so none of this is tracked on
//! the trail. The caches only grow during a search.

pub mod cache;
pub mod pairs;
pub mod primality;
pub mod primes;

pub use cache::Memo;
pub use pairs::PairOracle;
pub use primality::PrimalityOracle;
pub use primes::PrimeSequence;
