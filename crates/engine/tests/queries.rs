//! End-to-end checks of both queries through the public engine API.

use repdigit_engine::config::Config;
use repdigit_engine::membership::IntervalMembership;
use repdigit_engine::scanner::MultiRepeatScanner;
use repdigit_engine::{run, run_query_a, run_query_b};
use repdigit_shared_kernel::{Interval, RunningTotal};

const EXAMPLE: &[(u64, u64)] = &[
    (11, 22),
    (95, 115),
    (998, 1012),
    (1_188_511_880, 1_188_511_890),
    (222_220, 222_224),
    (1_698_522, 1_698_528),
    (446_443, 446_449),
    (38_593_856, 38_593_862),
    (565_653, 565_659),
    (824_824_821, 824_824_827),
    (2_121_212_118, 2_121_212_124),
];

fn example() -> Vec<Interval> {
    EXAMPLE
        .iter()
        .map(|&pair| Interval::try_from(pair).expect("valid interval"))
        .collect()
}

#[test]
fn example_query_a() {
    assert_eq!(run_query_a(example()), 1_227_775_554u64);
}

#[test]
fn example_query_b() {
    assert_eq!(run_query_b(example()), 4_174_379_265u64);
}

#[test]
fn example_run_reports_both_parts() {
    let result = run(&Config::default(), &example()).expect("run succeeds");
    assert_eq!(result.intervals, 11);
    assert_eq!(result.part_one, Some(RunningTotal::new(1_227_775_554)));
    assert_eq!(result.part_two, Some(RunningTotal::new(4_174_379_265)));
    assert_eq!(result.distinct, Some(101_088));
}

#[test]
fn example_membership_span() {
    let membership: IntervalMembership = example().into_iter().collect();
    assert_eq!(membership.span(), Some(Interval::new(11, 2_121_212_124).expect("valid")));
    assert!(membership.contains(222_222));
    assert!(membership.contains(998));
    assert!(membership.contains(1_000));
    assert!(membership.contains(1_012));
    assert!(!membership.contains(500));
    assert!(!membership.contains(1_500));
}

#[test]
fn query_b_dominates_query_a_on_disjoint_intervals() {
    // Every two-fold repeat is also a repeat of some count, so on disjoint
    // intervals the union total can only be larger.
    let intervals = example();
    let membership: IntervalMembership = intervals.iter().copied().collect();
    let union_total = MultiRepeatScanner::default().scan(&membership).total;
    assert!(union_total >= run_query_a(intervals));
}
