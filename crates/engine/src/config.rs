use crate::digits::pow10;
use crate::error::{EngineError, Result};
use crate::options::{OutputFormat, Part};
use derive_builder::Builder;

/// Largest base number the multi-repeat scan tries.
pub const DEFAULT_MAX_BASE: u64 = 99_999;
/// Digit length no interval endpoint exceeds.
pub const DEFAULT_MAX_TOTAL_DIGITS: u32 = 10;
/// `u64::MAX` has 20 digits, so 19 is the widest length that always fits.
pub const MAX_SUPPORTED_DIGITS: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanLimits {
    #[builder(default = "DEFAULT_MAX_BASE")]
    pub max_base: u64,
    #[builder(default = "DEFAULT_MAX_TOTAL_DIGITS")]
    pub max_total_digits: u32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_base: DEFAULT_MAX_BASE,
            max_total_digits: DEFAULT_MAX_TOTAL_DIGITS,
        }
    }
}

impl ScanLimits {
    /// Largest base whose two-fold repeat still fits in `max_total_digits`.
    ///
    /// Bases beyond `10^(max_total_digits / 2) - 1` cannot produce a repeat,
    /// so `max_base` is clamped to that.
    pub const fn effective_max_base(&self) -> u64 {
        let digits = if self.max_total_digits > MAX_SUPPORTED_DIGITS {
            MAX_SUPPORTED_DIGITS
        } else {
            self.max_total_digits
        };
        let ceiling = pow10(digits / 2) - 1;
        if self.max_base < ceiling { self.max_base } else { ceiling }
    }

    /// # Errors
    /// Returns [`EngineError::Config`] for a zero base limit or an unsupported digit length.
    pub fn validate(&self) -> Result<()> {
        if self.max_base == 0 {
            return Err(EngineError::Config("max_base must be at least 1".to_string()));
        }
        if !(1..=MAX_SUPPORTED_DIGITS).contains(&self.max_total_digits) {
            return Err(EngineError::Config(format!(
                "max_total_digits must be between 1 and {MAX_SUPPORTED_DIGITS}, got {}",
                self.max_total_digits
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub limits: ScanLimits,
    #[builder(default)]
    pub part: Part,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Config {
    /// # Errors
    /// Propagates [`ScanLimits::validate`].
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()
    }
}
