use repdigit_engine::config::MAX_SUPPORTED_DIGITS;
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `u64` (>= 1) from CLI input. Underscore separators are allowed.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a digit length in `[1, 19]`, the widest that always fits in a `u64`.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range.
pub fn parse_digit_limit(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 1, Some(MAX_SUPPORTED_DIGITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_u64_accepts_underscores() {
        assert_eq!(parse_positive_u64("99_999"), Ok(99_999));
    }

    #[test]
    fn test_positive_u64_rejects_zero() {
        assert!(parse_positive_u64("0").is_err());
    }

    #[test]
    fn test_digit_limit_bounds() {
        assert_eq!(parse_digit_limit("10"), Ok(10));
        assert_eq!(parse_digit_limit("19"), Ok(19));
        assert!(parse_digit_limit("0").is_err());
        assert!(parse_digit_limit("20").is_err());
        assert!(parse_digit_limit("ten").is_err());
    }
}
