// crates/cli/src/config.rs
use crate::args::Args;
pub use repdigit_engine::config::{Config, ConfigBuilder, ScanLimits, ScanLimitsBuilder};
use log::LevelFilter;

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            limits: ScanLimits {
                max_base: args.max_base,
                max_total_digits: args.max_digits,
            },
            part: args.part.into(),
            format: args.format.into(),
        }
    }
}

/// Log level selected by `-v`/`-q`; warnings only by default.
pub const fn log_level(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::Off;
    }
    match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
