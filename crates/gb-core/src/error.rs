//! Toolkit error type.
//!
//! Every failure is fatal to the invocation that raised it.  There is no
//! partial-result mode: a loader that hits a bad line returns the error and
//! drops everything it parsed so far.

use thiserror::Error;

/// The error type shared by `gb-grid` and `gb-bench`.
#[derive(Debug, Error)]
pub enum GbError {
    /// A grid dimension that is not a positive integer.
    #[error("invalid grid dimension {0:?}: expected a positive integer")]
    InvalidDimension(String),

    /// Source or destination path unreadable, unwritable, or missing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not match the expected column layout or a field fails
    /// type conversion.  `line` is 1-based.
    #[error("schema violation at line {line}: {reason}")]
    SchemaViolation { line: u64, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl GbError {
    /// Shorthand for building a [`GbError::SchemaViolation`].
    pub fn schema(line: u64, reason: impl Into<String>) -> Self {
        GbError::SchemaViolation { line, reason: reason.into() }
    }
}

/// Shorthand result type for all `gb-*` crates.
pub type GbResult<T> = Result<T, GbError>;
