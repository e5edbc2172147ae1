//! Error types for price data loading and transforms.

use thiserror::Error;

/// A specialized Result type for data loading operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or transforming price data.
#[derive(Debug, Error)]
pub enum DataError {
    /// File could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A price file contained no usable rows.
    #[error("no price data: {reason}")]
    Empty {
        /// Why the table came out empty.
        reason: String,
    },

    /// Requested tickers are absent from the loaded table.
    #[error("missing tickers: {tickers:?}")]
    MissingTickers {
        /// The tickers that could not be found.
        tickers: Vec<String>,
    },

    /// A row could not be interpreted (bad date, bad number, wrong width).
    #[error("invalid row {row}: {reason}")]
    InvalidRow {
        /// 1-based row number in the file.
        row: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Invalid transform input (too few observations, bad weights,
    /// non-positive prices).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl DataError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an empty-data error.
    #[must_use]
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            reason: reason.into(),
        }
    }
}
