//! Error types for gb-report.

use thiserror::Error;

/// Errors that can occur when writing a report or plot.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
