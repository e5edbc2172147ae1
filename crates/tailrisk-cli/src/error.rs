//! CLI error types.

use thiserror::Error;

/// CLI error type for input parsing.
#[derive(Debug, Error)]
pub enum CliError {
    /// Weight specification could not be parsed.
    #[error("Invalid weight '{0}'. Use TICKER=WEIGHT, e.g. SPY=0.5.")]
    InvalidWeight(String),

    /// Invalid confidence level.
    #[error("Invalid alpha: {0}. Must be strictly between 0 and 1.")]
    InvalidAlpha(f64),

    /// Portfolio file row could not be parsed.
    #[error("Invalid portfolio row {row}: {reason}")]
    InvalidPortfolioRow {
        /// 1-based row number.
        row: usize,
        /// Description of the problem.
        reason: String,
    },
}
