// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer arithmetic on decimal digits.
//!
//! Concatenated values grow well beyond the prime generation bound, so every
//! operation here is integer-only and checked. Nothing is derived from
//! floating-point logarithms.

pub mod digits;

pub use digits::{concat, digit_count, pow10};
