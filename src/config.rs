// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters.

use crate::context::CELLS_PER_SELECTION;
use crate::error::ConfigError;
use crate::trail::Trail;

/// Default upper bound for prime generation.
pub const DEFAULT_BOUND: u64 = 10_000;

/// Default number of primes in a combination.
pub const DEFAULT_SIZE: usize = 5;

/// Nine-digit bounds keep every concatenation of two candidates within a `u64`.
pub const MAX_BOUND: u64 = 999_999_999;

/// Largest combination size the trail can hold.
pub const MAX_SIZE: usize = Trail::MAX_SIZE / CELLS_PER_SELECTION;

/// Parameters for one search run.
///
/// # Example
///
/// ```
/// use prime_pair_search::config::SearchConfig;
///
/// let config = SearchConfig::default().with_bound(1000).with_size(4);
/// assert!(config.validate().is_ok());
/// assert!(SearchConfig::default().with_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Inclusive upper bound for the candidate primes.
    pub bound: u64,
    /// Number of primes in each combination.
    pub size: usize,
}

impl SearchConfig {
    pub fn new(bound: u64, size: usize) -> Self {
        Self { bound, size }
    }

    pub fn with_bound(self, bound: u64) -> Self {
        Self { bound, ..self }
    }

    pub fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Check that the parameters describe a search that can run exactly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroTargetSize);
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.bound > MAX_BOUND {
            return Err(ConfigError::BoundTooLarge {
                bound: self.bound,
                max: MAX_BOUND,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOUND, DEFAULT_SIZE)
    }
}
