//! Builds numbers by concatenating a base number's digits with itself.

use crate::digits::{count_digits, pow10};

/// Two-fold repetition: `duplicate(12) == 1212`.
#[inline]
pub const fn duplicate(x: u64) -> u64 {
    x * pow10(count_digits(x)) + x
}

/// Like [`duplicate`], but `None` when the result does not fit in a `u64`.
#[inline]
pub const fn checked_duplicate(x: u64) -> Option<u64> {
    let digits = count_digits(x);
    if digits > 19 {
        return None;
    }
    match x.checked_mul(pow10(digits)) {
        Some(shifted) => shifted.checked_add(x),
        None => None,
    }
}

/// `times`-fold repetition of `x`, whose digit count the caller already knows.
///
/// A `digits_of_x` that disagrees with `count_digits(x)` yields an unspecified value.
#[inline]
pub const fn repeat(x: u64, times: u32, digits_of_x: u32) -> u64 {
    let shift = pow10(digits_of_x);
    let mut value = 0;
    let mut i = 0;
    while i < times {
        value = value * shift + x;
        i += 1;
    }
    value
}
