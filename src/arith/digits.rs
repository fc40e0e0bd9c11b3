// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digit counting and concatenation.
//!
//! # Examples
//!
//! ```
//! use prime_pair_search::arith::{concat, digit_count};
//!
//! assert_eq!(digit_count(5197), 4);
//! assert_eq!(concat(3, 7), Some(37));
//! assert_eq!(concat(7, 3), Some(73));
//! assert_eq!(concat(u64::MAX, 1), None);
//! ```

/// Number of decimal digits in `n`. Zero has one digit.
pub fn digit_count(mut n: u64) -> u32 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// `10^exp`, or `None` if it does not fit in a `u64`.
pub fn pow10(exp: u32) -> Option<u64> {
    10u64.checked_pow(exp)
}

/// Decimal digits of `left` followed by the digits of `right`, read as one integer.
///
/// Returns `None` when the result does not fit in a `u64`.
pub fn concat(left: u64, right: u64) -> Option<u64> {
    let multiplier = pow10(digit_count(right))?;
    left.checked_mul(multiplier)?.checked_add(right)
}
