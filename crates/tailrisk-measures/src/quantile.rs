//! Quantile-based VaR/ES estimation over a loss sample.
//!
//! This is the single extraction point both the market and credit pipelines
//! feed into: any loss sample (historical, simulated market, simulated
//! credit) gets its VaR and ES from [`var_es`].

use crate::error::{MeasuresResult, RiskError};
use crate::types::RiskResult;

/// Estimate VaR and ES from a loss sample at confidence level `alpha`.
///
/// VaR is the interpolated `alpha`-quantile of the sample: with the sample
/// sorted ascending, the quantile sits at position `alpha * (n - 1)` and is
/// linearly interpolated between the neighbouring order statistics when the
/// position is not integral.
///
/// ES is the mean of all observations `>= VaR`. The boundary is inclusive:
/// ties at exactly the VaR level count towards the shortfall average, which
/// keeps ES defined on small and degenerate samples (the tail always
/// contains at least the observation defining the quantile). A constant
/// sample therefore yields ES == VaR.
///
/// # Errors
///
/// Returns [`RiskError::InvalidInput`] when the sample is empty, when
/// `alpha` is outside the open interval (0, 1), or when any observation is
/// non-finite.
pub fn var_es(losses: &[f64], alpha: f64) -> MeasuresResult<RiskResult> {
    validate_alpha(alpha)?;

    if losses.is_empty() {
        return Err(RiskError::invalid_input("loss sample is empty"));
    }
    if let Some(pos) = losses.iter().position(|v| !v.is_finite()) {
        return Err(RiskError::invalid_input(format!(
            "loss sample contains non-finite value {} at index {pos}",
            losses[pos]
        )));
    }

    let mut sorted = losses.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let var = interpolated_quantile(&sorted, alpha);

    // Inclusive tail: everything at or above the VaR level. Non-empty by
    // construction since max(sample) >= var.
    let mut tail_sum = 0.0;
    let mut tail_count = 0usize;
    for &loss in sorted.iter().rev() {
        if loss < var {
            break;
        }
        tail_sum += loss;
        tail_count += 1;
    }
    let es = tail_sum / tail_count as f64;

    Ok(RiskResult { var, es, alpha })
}

/// Validates that a confidence level lies strictly inside (0, 1).
pub(crate) fn validate_alpha(alpha: f64) -> MeasuresResult<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(RiskError::invalid_input(format!(
            "alpha must be in (0, 1), got {alpha}"
        )));
    }
    Ok(())
}

/// Interpolated quantile of a sorted sample.
///
/// Linear interpolation between order statistics at fractional positions,
/// matching the common "linear" quantile definition.
fn interpolated_quantile(sorted: &[f64], alpha: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let position = alpha * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + fraction * (sorted[upper] - sorted[lower])
    }
}
