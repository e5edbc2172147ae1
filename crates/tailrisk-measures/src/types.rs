//! Core value types shared by the market and credit risk pipelines.

use serde::{Deserialize, Serialize};

/// An unordered sample of loss observations.
///
/// Losses are positive numbers (a loss of 0.02 means 2% lost, or a monetary
/// amount for credit losses). A sample is built fresh per estimation call
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossSample(Vec<f64>);

impl LossSample {
    /// Wraps a vector of loss observations.
    pub fn new(losses: Vec<f64>) -> Self {
        Self(losses)
    }

    /// Number of observations in the sample.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The observations as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Arithmetic mean of the sample, or `None` for an empty sample.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
        }
    }

    /// Consumes the sample and returns the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for LossSample {
    fn from(losses: Vec<f64>) -> Self {
        Self(losses)
    }
}

impl AsRef<[f64]> for LossSample {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// A Value-at-Risk / Expected Shortfall pair at a given confidence level.
///
/// Both figures are in loss units (positive = loss), in whatever scale the
/// input sample used (return fractions for market risk, currency for
/// credit risk).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Value-at-Risk: the loss level not exceeded with probability `alpha`.
    pub var: f64,
    /// Expected Shortfall: mean loss conditional on reaching the VaR level.
    pub es: f64,
    /// Confidence level the measures were computed at, e.g. 0.95.
    pub alpha: f64,
}

impl std::fmt::Display for RiskResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.1}%) = {:.6}, ES = {:.6}",
            self.alpha * 100.0,
            self.var,
            self.es
        )
    }
}
