// crates/shared-kernel/src/value_objects/interval.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Inclusive range of integers `[low, high]` with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    low: u64,
    high: u64,
}

impl Interval {
    /// Builds an interval, rejecting inverted bounds.
    ///
    /// # Errors
    /// Returns [`DomainError::InvertedInterval`] when `low > high`.
    pub fn new(low: u64, high: u64) -> DomainResult<Self> {
        if low > high {
            return Err(DomainError::InvertedInterval { low, high });
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub const fn low(self) -> u64 {
        self.low
    }

    #[inline]
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Inclusive on both ends.
    #[inline]
    pub const fn contains(self, value: u64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Smallest interval covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn hull(self, other: Self) -> Self {
        Self {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

impl TryFrom<(u64, u64)> for Interval {
    type Error = DomainError;

    fn try_from((low, high): (u64, u64)) -> DomainResult<Self> {
        Self::new(low, high)
    }
}

impl From<Interval> for (u64, u64) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[derive(Deserialize)]
struct RawInterval {
    low: u64,
    high: u64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = DomainError;

    fn try_from(raw: RawInterval) -> DomainResult<Self> {
        Self::new(raw.low, raw.high)
    }
}
