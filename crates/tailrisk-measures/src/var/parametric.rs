//! Parametric (variance-covariance) VaR/ES under normality.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::{MeasuresResult, RiskError};
use crate::quantile::validate_alpha;
use crate::types::RiskResult;

/// Closed-form VaR/ES assuming normally distributed returns.
///
/// With μ and σ the sample mean and Bessel-corrected standard deviation of
/// the return series and z = Φ⁻¹(α):
///
/// - VaR = zσ − μ (the α-quantile of the loss distribution, positive loss)
/// - ES  = σφ(z)/(1−α) − μ (the normal tail expectation)
///
/// No sampling is involved; this path does not go through the quantile
/// estimator.
///
/// # Errors
///
/// Fails with [`RiskError::InsufficientData`] on fewer than 2 observations
/// (σ is undefined) and [`RiskError::InvalidInput`] when `alpha` is outside
/// (0, 1). The strict upper bound matters: the ES term divides by 1 − α.
pub fn parametric_var_es(returns: &[f64], alpha: f64) -> MeasuresResult<RiskResult> {
    validate_alpha(alpha)?;
    let (mu, sigma) = sample_moments(returns)?;

    let standard_normal = Normal::new(0.0, 1.0).expect("unit normal parameters");
    let z = standard_normal.inverse_cdf(alpha);
    let density = standard_normal.pdf(z);

    let var = z * sigma - mu;
    let es = sigma * density / (1.0 - alpha) - mu;

    Ok(RiskResult { var, es, alpha })
}

/// Sample mean and Bessel-corrected (n−1) standard deviation.
pub(crate) fn sample_moments(returns: &[f64]) -> MeasuresResult<(f64, f64)> {
    if returns.len() < 2 {
        return Err(RiskError::insufficient_data(2, returns.len()));
    }
    if let Some(pos) = returns.iter().position(|v| !v.is_finite()) {
        return Err(RiskError::invalid_input(format!(
            "return series contains non-finite value at index {pos}"
        )));
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok((mean, variance.sqrt()))
}
