use repdigit_shared_kernel::Interval;

/// Every input interval, queried for membership of candidate numerals.
///
/// Intervals are kept in insertion order; overlap is allowed and scan order
/// does not affect [`IntervalMembership::contains`].
#[derive(Debug, Clone, Default)]
pub struct IntervalMembership {
    intervals: Vec<Interval>,
    span: Option<Interval>,
}

impl IntervalMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interval(&mut self, interval: Interval) {
        self.span = Some(match self.span {
            Some(span) => span.hull(interval),
            None => interval,
        });
        self.intervals.push(interval);
    }

    /// True when some stored interval holds `value`.
    pub fn contains(&self, value: u64) -> bool {
        self.intervals.iter().any(|interval| interval.contains(value))
    }

    /// `[min of all lows, max of all highs]`, or `None` while empty.
    pub const fn span(&self) -> Option<Interval> {
        self.span
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl FromIterator<Interval> for IntervalMembership {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut membership = Self::new();
        membership.extend(iter);
        membership
    }
}

impl Extend<Interval> for IntervalMembership {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}
