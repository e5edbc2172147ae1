//! Error types for risk-measure estimation.

use thiserror::Error;

/// A specialized Result type for risk-measure estimation.
pub type MeasuresResult<T> = Result<T, RiskError>;

/// Errors that can occur while estimating risk measures.
///
/// Every failure is raised at the point of detection; no partial result is
/// ever returned and no input is silently substituted with a default.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Malformed numeric input (empty sample, out-of-range alpha,
    /// non-finite values, non-positive simulation count).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Too few observations for the requested estimate.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },
}

impl RiskError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
