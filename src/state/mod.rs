// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search outputs: recorded combinations and statistics.
//!
//! Neither is tracked on the trail; both accumulate across backtracking.

pub mod combination;
pub mod statistics;

pub use combination::Combination;
pub use statistics::{Counters, Statistics};
