// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration and search.
//!
//! Finding no combination is not an error; see [`crate::search::SearchOutcome`].

use thiserror::Error;

/// Rejected search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Combinations must contain at least one prime.
    #[error("combination size must be at least 1")]
    ZeroTargetSize,

    /// Concatenating two primes near the bound would not fit in a `u64`.
    #[error("bound {bound} is too large (max {max})")]
    BoundTooLarge { bound: u64, max: u64 },

    /// Each selected prime takes trail entries; the trail has a fixed capacity.
    #[error("combination size {size} is too large (max {max})")]
    SizeTooLarge { size: usize, max: usize },
}

/// Failures that abort a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A concatenation exceeded `u64`, so its primality cannot be decided exactly.
    #[error("concatenation of {left} and {right} overflows u64")]
    ConcatOverflow { left: u64, right: u64 },

    /// The engine suspended without recording a fault. The combination
    /// predicate always records one first; this covers any other predicate
    /// that suspends a search program.
    #[error("search was interrupted before exhausting the search space")]
    Interrupted,
}
