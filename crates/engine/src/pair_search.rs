//! Sums two-fold repeated numbers inside one interval without walking it.
//!
//! A two-fold repeat always has an even digit count and `duplicate` is strictly
//! increasing, so every candidate lies in a contiguous range of half values
//! whose ends follow from the digit counts of the interval endpoints.

use crate::digits::{count_digits, pow10, split_halves};
use crate::repeat::checked_duplicate;
use log::trace;
use repdigit_shared_kernel::{Interval, RunningTotal};

/// Inclusive range of half values worth duplicating for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBounds {
    pub min: u64,
    pub max: u64,
}

/// Lowest half value to try when `low` has an even digit count.
#[inline]
pub const fn lower_bound_even(low: u64, digits: u32) -> u64 {
    let (high_half, low_half) = split_halves(low, digits);
    if high_half < low_half { high_half } else { low_half }
}

/// Lowest half value to try when `low` has an odd digit count: the smallest
/// number with one digit more than half of `digits`.
#[inline]
pub const fn lower_bound_odd(digits: u32) -> u64 {
    pow10(digits / 2)
}

/// Highest half value to try when `high` has an even digit count.
#[inline]
pub const fn upper_bound_even(high: u64, digits: u32) -> u64 {
    let (high_half, low_half) = split_halves(high, digits);
    if high_half > low_half { high_half } else { low_half }
}

/// Highest half value to try when `high` has an odd digit count: the largest
/// number with fewer than half of `digits`.
#[inline]
pub const fn upper_bound_odd(digits: u32) -> u64 {
    pow10(digits / 2) - 1
}

/// Derives the half-value search range, or `None` when both endpoints share
/// one odd digit count and so no two-fold repeat can fit.
pub fn half_bounds(interval: Interval) -> Option<HalfBounds> {
    let (low, high) = (interval.low(), interval.high());
    let low_digits = count_digits(low);
    let high_digits = count_digits(high);

    if low_digits == high_digits && low_digits % 2 != 0 {
        return None;
    }

    let min = if low_digits % 2 == 0 {
        lower_bound_even(low, low_digits)
    } else {
        lower_bound_odd(low_digits)
    };
    let max = if high_digits % 2 == 0 {
        upper_bound_even(high, high_digits)
    } else {
        upper_bound_odd(high_digits)
    };

    trace!("interval {interval}: half bounds {min}..={max}");
    Some(HalfBounds { min, max })
}

/// Sum of every two-fold repeated number within `interval`.
pub fn sum_doubled_in(interval: Interval) -> RunningTotal {
    let Some(HalfBounds { min, max }) = half_bounds(interval) else {
        return RunningTotal::zero();
    };

    let mut total = RunningTotal::zero();
    for half in min..=max {
        let Some(doubled) = checked_duplicate(half) else {
            break;
        };
        if doubled > interval.high() {
            break;
        }
        if doubled >= interval.low() {
            total += doubled;
        }
    }
    total
}
