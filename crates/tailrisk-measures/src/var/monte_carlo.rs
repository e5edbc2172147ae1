//! Monte Carlo VaR/ES under a fitted normal return model.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::parametric::sample_moments;
use crate::error::{MeasuresResult, RiskError};
use crate::quantile::var_es;
use crate::types::{LossSample, RiskResult};

/// Simulates a loss sample from a normal model fitted to `returns`.
///
/// μ and σ are estimated as in the parametric path (Bessel-corrected σ);
/// `n_sims` independent Normal(μ, σ) variates are drawn from `rng` and
/// negated into losses. Draws are i.i.d.; the caller owns the generator
/// and its seed, so a fixed seed reproduces the sample exactly.
///
/// # Errors
///
/// Fails on fewer than 2 observations, non-finite returns, or
/// `n_sims == 0`.
pub fn monte_carlo_losses<R: Rng + ?Sized>(
    returns: &[f64],
    n_sims: usize,
    rng: &mut R,
) -> MeasuresResult<LossSample> {
    if n_sims < 1 {
        return Err(RiskError::invalid_input(
            "n_sims must be a positive integer",
        ));
    }
    let (mu, sigma) = sample_moments(returns)?;

    let model = Normal::new(mu, sigma)
        .map_err(|e| RiskError::invalid_input(format!("normal model: {e}")))?;

    let losses = (0..n_sims).map(|_| -model.sample(rng)).collect();
    Ok(LossSample::new(losses))
}

/// Monte Carlo VaR/ES: simulate losses, then apply the quantile estimator.
///
/// # Errors
///
/// Propagates simulation errors plus the quantile estimator's `alpha`
/// validation.
pub fn monte_carlo_var_es<R: Rng + ?Sized>(
    returns: &[f64],
    alpha: f64,
    n_sims: usize,
    rng: &mut R,
) -> MeasuresResult<RiskResult> {
    let losses = monte_carlo_losses(returns, n_sims, rng)?;
    var_es(losses.as_slice(), alpha)
}
