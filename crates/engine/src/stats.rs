use repdigit_shared_kernel::RunningTotal;
use serde::Serialize;

/// Totals produced by one [`crate::run`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Number of intervals read.
    pub intervals: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_one: Option<RunningTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_two: Option<RunningTotal>,
    /// Distinct numerals generated by the part two scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct: Option<usize>,
    /// Distinct numerals that landed in an interval during the part two scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
}
