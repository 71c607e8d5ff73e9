//! Decodes lines of comma-separated `<low>-<high>` tokens into intervals.

use std::fs::File;
use std::io::{BufRead, BufReader, stdin};
use std::path::Path;

use repdigit_shared_kernel::{
    DomainError, DomainResult, ErrorContext, InfrastructureError, Interval, Result,
};

/// Read intervals from `path`, or from standard input when `path` is `-`.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or a token is malformed.
pub fn read_intervals(path: &Path) -> Result<Vec<Interval>> {
    if path.as_os_str() == "-" {
        return parse_intervals(stdin().lock()).context("reading ranges from stdin");
    }

    let file = File::open(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_intervals(BufReader::new(file)).with_context(|| format!("reading ranges from {}", path.display()))
}

/// Decode every line of `reader`. Blank lines are skipped.
///
/// # Errors
/// Returns the first I/O failure or malformed token encountered.
pub fn parse_intervals<R: BufRead>(reader: R) -> Result<Vec<Interval>> {
    let mut intervals = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        intervals.extend(parse_line(&line, index + 1)?);
    }
    Ok(intervals)
}

/// Decode one line; `line_no` is 1-based and only used in errors.
///
/// # Errors
/// Returns a [`DomainError`] naming the first bad token.
pub fn parse_line(line: &str, line_no: usize) -> DomainResult<Vec<Interval>> {
    line.trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_token(token, line_no))
        .collect()
}

fn parse_token(token: &str, line_no: usize) -> DomainResult<Interval> {
    let (low, high) = token.split_once('-').ok_or_else(|| DomainError::MalformedToken {
        line: line_no,
        token: token.to_string(),
    })?;
    Interval::new(parse_endpoint(low, line_no)?, parse_endpoint(high, line_no)?)
}

fn parse_endpoint(text: &str, line_no: usize) -> DomainResult<u64> {
    let text = text.trim();
    text.parse::<u64>().map_err(|err| DomainError::InvalidNumber {
        line: line_no,
        value: text.to_string(),
        details: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use repdigit_shared_kernel::RepdigitError;
    use std::io::Cursor;

    fn pairs(intervals: &[Interval]) -> Vec<(u64, u64)> {
        intervals.iter().map(|&i| i.into()).collect()
    }

    #[test]
    fn parses_single_line() {
        let intervals = parse_line("11-22,95-115,998-1012", 1).unwrap();
        assert_eq!(pairs(&intervals), vec![(11, 22), (95, 115), (998, 1012)]);
    }

    #[test]
    fn tolerates_whitespace_and_trailing_comma() {
        let intervals = parse_line("  1-17 , 27-86,\r", 1).unwrap();
        assert_eq!(pairs(&intervals), vec![(1, 17), (27, 86)]);
    }

    #[test]
    fn blank_line_yields_nothing() {
        assert!(parse_line("", 3).unwrap().is_empty());
        assert!(parse_line("   ", 3).unwrap().is_empty());
    }

    #[test]
    fn reports_missing_dash_with_line() {
        assert_eq!(
            parse_line("1-2,345", 7),
            Err(DomainError::MalformedToken { line: 7, token: "345".to_string() })
        );
    }

    #[test]
    fn reports_bad_number() {
        let err = parse_line("12-x4", 2).unwrap_err();
        assert!(matches!(err, DomainError::InvalidNumber { line: 2, ref value, .. } if value == "x4"));
        assert!(parse_line("-5", 1).is_err());
        assert!(parse_line("5-", 1).is_err());
    }

    #[test]
    fn reports_inverted_interval() {
        assert_eq!(
            parse_line("30-20", 1),
            Err(DomainError::InvertedInterval { low: 30, high: 20 })
        );
    }

    #[test]
    fn multi_line_input() {
        let input = Cursor::new("11-22,95-115\n\n998-1012\n");
        let intervals = parse_intervals(input).unwrap();
        assert_eq!(pairs(&intervals), vec![(11, 22), (95, 115), (998, 1012)]);
    }

    #[test]
    fn multi_line_error_carries_line_number() {
        let input = Cursor::new("11-22\n95_115\n");
        let err = parse_intervals(input).unwrap_err();
        assert!(matches!(
            err,
            RepdigitError::Domain(DomainError::MalformedToken { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_intervals(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(
            err,
            RepdigitError::Infrastructure(InfrastructureError::FileRead { .. })
        ));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rendering intervals as tokens and decoding them gives the same intervals
        #[test]
        fn decodes_rendered_tokens(raw in prop::collection::vec((0u64..10_000_000_000, 0u64..1_000_000), 1..20)) {
            let expected: Vec<Interval> = raw
                .iter()
                .map(|&(low, width)| Interval::new(low, low + width).unwrap())
                .collect();
            let line = expected.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
            prop_assert_eq!(parse_line(&line, 1).unwrap(), expected);
        }
    }
}
