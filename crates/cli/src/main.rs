use clap::Parser;
use repdigit_cli::args::Args;
use repdigit_cli::{config, logger};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(config::log_level(&args));

    match repdigit_cli::execute(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
