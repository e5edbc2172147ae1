//! Error types for credit risk calculations.

use thiserror::Error;

use tailrisk_measures::RiskError;

/// A specialized Result type for credit risk calculations.
pub type CreditResult<T> = Result<T, CreditError>;

/// Errors that can occur during credit risk calculations.
///
/// Referential integrity failures are never papered over with a default
/// PD; a missing or unknown rating fails the whole calculation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreditError {
    /// An obligor carries exposure but has no rating assigned.
    #[error("obligor '{obligor}' has exposure but no rating")]
    MissingRating {
        /// The obligor without a rating entry.
        obligor: String,
    },

    /// An obligor's rating label is absent from the PD reference table.
    #[error("obligor '{obligor}' has rating '{rating}' which is not in the PD table")]
    UnknownRating {
        /// The obligor carrying the unknown rating.
        obligor: String,
        /// The rating label that could not be resolved.
        rating: String,
    },

    /// Malformed numeric input (bad exposure, LGD, PD or simulation count).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Error from the risk-measure estimator.
    #[error(transparent)]
    Measure(#[from] RiskError),
}

impl CreditError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
