//! Sums distinct repeated numbers of any repeat count over the interval union.
//!
//! Rather than walking the intervals, the scan enumerates a fixed domain of
//! base numbers and, for each, every repeat count that keeps the result within
//! the configured digit length. The same numeral can come from several
//! `(base, times)` pairs (`2 x 6`, `22 x 3` and `222 x 2` all give `222222`),
//! so each value is counted only the first time it is produced.

use crate::config::ScanLimits;
use crate::digits::count_digits;
use crate::membership::IntervalMembership;
use crate::repeat::repeat;
use hashbrown::HashSet;
use log::debug;
use repdigit_shared_kernel::RunningTotal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanOutcome {
    pub total: RunningTotal,
    /// Distinct numerals generated.
    pub distinct: usize,
    /// Distinct numerals that fell inside some interval.
    pub matched: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiRepeatScanner {
    limits: ScanLimits,
}

impl MultiRepeatScanner {
    pub const fn new(limits: ScanLimits) -> Self {
        Self { limits }
    }

    pub fn scan(&self, membership: &IntervalMembership) -> ScanOutcome {
        let max_total_digits = self.limits.max_total_digits;
        let max_base = self.limits.effective_max_base();

        let mut seen: HashSet<u64> = HashSet::new();
        let mut outcome = ScanOutcome::default();
        let span = membership.span();

        for candidate in 1..=max_base {
            let digits = count_digits(candidate);
            let max_repeat = max_total_digits / digits;

            for times in 2..=max_repeat {
                let value = repeat(candidate, times, digits);
                if !seen.insert(value) {
                    continue;
                }
                if span.is_some_and(|span| span.contains(value)) && membership.contains(value) {
                    outcome.total += value;
                    outcome.matched += 1;
                }
            }
        }

        outcome.distinct = seen.len();
        debug!(
            "scanned bases 1..={max_base}: {} distinct numerals, {} matched, total {}",
            outcome.distinct, outcome.matched, outcome.total
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanLimitsBuilder;
    use repdigit_shared_kernel::Interval;

    fn membership(pairs: &[(u64, u64)]) -> IntervalMembership {
        pairs
            .iter()
            .map(|&pair| Interval::try_from(pair).unwrap())
            .collect()
    }

    fn scan(pairs: &[(u64, u64)]) -> ScanOutcome {
        MultiRepeatScanner::default().scan(&membership(pairs))
    }

    #[test]
    fn numeral_reachable_three_ways_counts_once() {
        let outcome = scan(&[(222_222, 222_222)]);
        assert_eq!(outcome.total, 222_222u64);
        assert_eq!(outcome.matched, 1);
    }

    #[test]
    fn overlapping_intervals_count_once() {
        assert_eq!(scan(&[(1, 100), (50, 100), (99, 99)]).total, 495u64);
    }

    #[test]
    fn no_repeat_in_interval_gives_zero() {
        let outcome = scan(&[(10, 10)]);
        assert!(outcome.total.is_zero());
        assert_eq!(outcome.matched, 0);
    }

    #[test]
    fn empty_membership_gives_zero() {
        assert!(MultiRepeatScanner::default().scan(&IntervalMembership::new()).total.is_zero());
    }

    #[test]
    fn counts_every_repeat_count() {
        // 111 and 999 are three-fold repeats, 1010 two-fold
        assert_eq!(scan(&[(100, 1010)]).total, 111u64 * (1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9) + 1010);
    }

    #[test]
    fn distinct_numerals_for_default_domain() {
        let outcome = scan(&[(1, 9_999_999_999)]);
        assert_eq!(outcome.distinct, 101_088);
        assert_eq!(outcome.matched, outcome.distinct);
    }

    #[test]
    fn respects_custom_limits() {
        let limits = ScanLimitsBuilder::default()
            .max_base(9u64)
            .max_total_digits(4u32)
            .build()
            .unwrap();
        let outcome = MultiRepeatScanner::new(limits).scan(&membership(&[(1, 10_000)]));
        assert_eq!(outcome.total, 45u64 * (11 + 111 + 1111));
        assert_eq!(outcome.distinct, 27);
    }

    #[test]
    fn oversized_base_limit_is_clamped() {
        let tight = ScanLimitsBuilder::default()
            .max_base(99u64)
            .max_total_digits(4u32)
            .build()
            .unwrap();
        let loose = ScanLimits { max_base: u64::MAX, ..tight };
        let set = membership(&[(1, 10_000)]);

        let expected = MultiRepeatScanner::new(tight).scan(&set);
        let clamped = MultiRepeatScanner::new(loose).scan(&set);
        assert_eq!(clamped, expected);
        // 27 single-digit repeats, 90 doubled two-digit bases, 11..99 x 2 already seen as 1111..9999
        assert_eq!(clamped.distinct, 108);
    }
}
