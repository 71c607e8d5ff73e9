// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod parsers;
pub mod presentation;
pub mod value_enum;

use crate::args::Args;
use crate::error::Result;
use log::info;
use repdigit_engine::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read the input named by `args`, run the selected queries and render the report.
///
/// # Errors
///
/// Returns an error when the input cannot be read or decoded, when an interval
/// exceeds the configured digit length, or when rendering fails.
pub fn execute(args: &Args) -> Result<String> {
    let config = Config::from(args);
    let intervals = input::read_intervals(&args.input)?;
    info!("read {} intervals from {}", intervals.len(), args.input.display());

    let result = repdigit_engine::run(&config, &intervals)?;
    presentation::render(&result, config.format)
}
