// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RepdigitError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RepdigitError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, RepdigitError>;

/// Errors raised while turning raw input into intervals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Interval lower bound {low} exceeds upper bound {high}")]
    InvertedInterval { low: u64, high: u64 },

    #[error("Malformed range token '{token}' on line {line}: expected <low>-<high>")]
    MalformedToken { line: usize, token: String },

    #[error("Invalid number '{value}' on line {line}: {details}")]
    InvalidNumber {
        line: usize,
        value: String,
        details: String,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read input '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for RepdigitError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RepdigitError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RepdigitError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RepdigitError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
