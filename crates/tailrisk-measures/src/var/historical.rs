//! Historical (empirical) VaR/ES.

use crate::error::MeasuresResult;
use crate::quantile::var_es;
use crate::types::{LossSample, RiskResult};

/// Converts a return series into an empirical loss sample.
///
/// Loss = −return for every observation; the count is preserved, no
/// resampling or reweighting takes place.
pub fn historical_losses(returns: &[f64]) -> LossSample {
    LossSample::new(returns.iter().map(|r| -r).collect())
}

/// Historical VaR/ES for a 1-day horizon.
///
/// The empirical loss distribution feeds straight into the quantile
/// estimator, so quantile and tie semantics are exactly those of
/// [`var_es`](crate::quantile::var_es).
///
/// # Errors
///
/// Fails as the quantile estimator does: empty series, alpha outside
/// (0, 1), or non-finite returns.
pub fn historical_var_es(returns: &[f64], alpha: f64) -> MeasuresResult<RiskResult> {
    let losses = historical_losses(returns);
    var_es(losses.as_slice(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_losses_negate_returns() {
        let losses = historical_losses(&[0.01, -0.02, 0.0]);
        assert_eq!(losses.as_slice(), &[-0.01, 0.02, 0.0]);
    }

    #[test]
    fn test_count_preserved() {
        let returns: Vec<f64> = (0..252).map(|i| (i as f64) * 1e-4).collect();
        assert_eq!(historical_losses(&returns).len(), 252);
    }

    #[test]
    fn test_var_es_on_known_sample() {
        // Ten returns, losses are -returns; worst losses are 0.02 and 0.015.
        let returns = [
            -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
        ];
        let result = historical_var_es(&returns, 0.95).unwrap();

        // Sorted losses: -0.025 .. 0.02; quantile position 0.95 * 9 = 8.55.
        assert_relative_eq!(result.var, 0.015 + 0.55 * 0.005, epsilon = 1e-12);
        assert_relative_eq!(result.es, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(historical_var_es(&[], 0.95).is_err());
    }
}
