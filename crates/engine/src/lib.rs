// crates/engine/src/lib.rs
use log::debug;
use repdigit_shared_kernel::{Interval, RunningTotal};

pub mod config;
pub mod digits;
pub mod error;
pub mod membership;
pub mod options;
pub mod pair_search;
pub mod repeat;
pub mod scanner;
pub mod stats;

use crate::config::{Config, ScanLimits};
use crate::digits::count_digits;
use crate::error::{EngineError, Result};
use crate::membership::IntervalMembership;
use crate::scanner::MultiRepeatScanner;
use crate::stats::RunResult;

/// Sum of every two-fold repeated number in each interval, intervals taken
/// independently. A numeral lying in two intervals is counted twice.
pub fn run_query_a<I>(intervals: I) -> RunningTotal
where
    I: IntoIterator<Item = Interval>,
{
    intervals
        .into_iter()
        .map(|interval| {
            let contribution = pair_search::sum_doubled_in(interval);
            debug!("interval {interval}: two-fold repeats sum to {contribution}");
            contribution
        })
        .sum()
}

/// Sum of every distinct repeated number, any repeat count, lying in the
/// union of `intervals`, using the default scan limits.
pub fn run_query_b<I>(intervals: I) -> RunningTotal
where
    I: IntoIterator<Item = Interval>,
{
    let membership: IntervalMembership = intervals.into_iter().collect();
    MultiRepeatScanner::new(ScanLimits::default())
        .scan(&membership)
        .total
}

/// Run the queries selected by `config` over `intervals`.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or an interval endpoint
/// is wider than `config.limits.max_total_digits`.
pub fn run(config: &Config, intervals: &[Interval]) -> Result<RunResult> {
    config.validate()?;
    check_endpoints(intervals, config.limits.max_total_digits)?;

    let mut result = RunResult {
        intervals: intervals.len(),
        ..RunResult::default()
    };

    if config.part.includes_one() {
        result.part_one = Some(run_query_a(intervals.iter().copied()));
    }

    if config.part.includes_two() {
        let membership: IntervalMembership = intervals.iter().copied().collect();
        let outcome = MultiRepeatScanner::new(config.limits).scan(&membership);
        result.part_two = Some(outcome.total);
        result.distinct = Some(outcome.distinct);
        result.matched = Some(outcome.matched);
    }

    Ok(result)
}

fn check_endpoints(intervals: &[Interval], max_digits: u32) -> Result<()> {
    // high >= low, so the upper endpoint is always the wider one
    intervals
        .iter()
        .map(|interval| interval.high())
        .find_map(|value| {
            let digits = count_digits(value);
            (digits > max_digits).then_some(EngineError::EndpointOutOfRange {
                value,
                digits,
                max: max_digits,
            })
        })
        .map_or(Ok(()), Err)
}
