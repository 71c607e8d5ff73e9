// crates/cli/src/presentation.rs
use crate::error::Result;
use repdigit_engine::options::OutputFormat;
use repdigit_engine::stats::RunResult;
use std::fmt::Write;

/// Render `result` in the requested format, newline-terminated.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(result: &RunResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(result)),
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => render_json(result),
    }
}

fn render_plain(result: &RunResult) -> String {
    let mut out = String::new();
    if let Some(total) = result.part_one {
        let _ = writeln!(out, "Part one:  {total}");
    }
    if let Some(total) = result.part_two {
        let _ = writeln!(out, "Part two:  {total}");
    }
    out
}

fn render_table(result: &RunResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "repdigit v{} · intervals={}", crate::VERSION, result.intervals);
    let _ = writeln!(out);
    let _ = writeln!(out, "PART                 TOTAL     NOTE");
    let _ = writeln!(out, "----------------------------------------------");

    if let Some(total) = result.part_one {
        let _ = writeln!(out, "{:<6}{:>20}     two-fold repeats per range", "one", total.value());
    }
    if let Some(total) = result.part_two {
        let _ = writeln!(out, "{:<6}{:>20}     any repeat count, union of ranges", "two", total.value());
    }

    if let (Some(distinct), Some(matched)) = (result.distinct, result.matched) {
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "{matched} of {distinct} distinct repeated numerals fell in range");
    }
    out
}

fn render_json(result: &RunResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}
