// crates/shared-kernel/src/value_objects/total.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Accumulated sum of repeated-digit numbers produced by one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunningTotal(u64);

impl RunningTotal {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for RunningTotal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for RunningTotal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<u64> for RunningTotal {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for RunningTotal {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<u64> for RunningTotal {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

impl Sum for RunningTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for RunningTotal {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<u64> for RunningTotal {
    fn sum<I: Iterator<Item = u64>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

impl From<u64> for RunningTotal {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<RunningTotal> for u64 {
    fn from(total: RunningTotal) -> Self {
        total.0
    }
}

impl PartialEq<u64> for RunningTotal {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::RunningTotal;

    impl fmt::Display for RunningTotal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
