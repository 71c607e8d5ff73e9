// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use repdigit_engine::config::{DEFAULT_MAX_BASE, DEFAULT_MAX_TOTAL_DIGITS};

use crate::parsers::{parse_digit_limit, parse_positive_u64};
use crate::value_enum::{CliOutputFormat, CliPart};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "repdigit",
    version = crate::VERSION,
    about = "Sum repeated-digit numbers (1212, 777, 123123123) over ranges",
    long_about = "Reads lines of comma-separated <low>-<high> ranges and reports\n\
                  part one: the sum of two-fold repeats inside each range, and\n\
                  part two: the sum of distinct repeats of any count in the union of ranges."
)]
pub struct Args {
    /// Range file; `-` reads standard input
    #[arg(default_value = "input.txt", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Which part to compute
    #[arg(long, value_enum, default_value = "both", help_heading = "Query")]
    pub part: CliPart,

    /// Largest base number tried by part two
    #[arg(long, default_value_t = DEFAULT_MAX_BASE, value_parser = parse_positive_u64, help_heading = "Query")]
    pub max_base: u64,

    /// Widest numeral (in digits) considered; also caps range endpoints
    #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_DIGITS, value_parser = parse_digit_limit, help_heading = "Query")]
    pub max_digits: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Log more (repeatable: -v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Output")]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}
