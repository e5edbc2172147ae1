//! Monte Carlo simulation of portfolio credit losses.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use tailrisk_measures::quantile::var_es;
use tailrisk_measures::types::{LossSample, RiskResult};

use crate::error::{CreditError, CreditResult};
use crate::expected_loss::validate_lgd;
use crate::tables::{resolve_obligors, ExposureTable, PdTable, RatingTable};

/// Simulates 1-year portfolio credit losses.
///
/// Each trial draws one independent Bernoulli default indicator per
/// obligor with success probability PD(rating), and sums
/// `indicator × exposure × lgd` into the trial loss. Trials are mutually
/// independent, as are obligors within a trial; there is no correlation
/// model. The caller owns the generator, so a fixed seed reproduces the
/// sample exactly (obligors are drawn in sorted-name order).
///
/// # Errors
///
/// All validation happens before the first draw: broken table links raise
/// [`CreditError::MissingRating`] / [`CreditError::UnknownRating`], and an
/// out-of-range `lgd` or `n_sims == 0` raises
/// [`CreditError::InvalidInput`].
pub fn simulate_credit_losses<R: Rng + ?Sized>(
    exposures: &ExposureTable,
    ratings: &RatingTable,
    pd_table: &PdTable,
    lgd: f64,
    n_sims: usize,
    rng: &mut R,
) -> CreditResult<LossSample> {
    validate_lgd(lgd)?;
    if n_sims < 1 {
        return Err(CreditError::invalid_input(
            "n_sims must be a positive integer",
        ));
    }

    let obligors = resolve_obligors(exposures, ratings, pd_table)?;

    // PDs come validated from the table, so Bernoulli construction
    // cannot fail; loss-at-default is constant per obligor.
    let draws: Vec<(Bernoulli, f64)> = obligors
        .iter()
        .map(|o| {
            let indicator = Bernoulli::new(o.pd)
                .map_err(|e| CreditError::invalid_input(format!("pd {}: {e}", o.pd)))?;
            Ok((indicator, o.exposure * lgd))
        })
        .collect::<CreditResult<_>>()?;

    let mut losses = Vec::with_capacity(n_sims);
    for _ in 0..n_sims {
        let mut trial_loss = 0.0;
        for (indicator, loss_at_default) in &draws {
            if indicator.sample(rng) {
                trial_loss += loss_at_default;
            }
        }
        losses.push(trial_loss);
    }

    Ok(LossSample::new(losses))
}

/// Credit VaR/ES over a simulated loss sample.
///
/// Delegates to the shared quantile estimator, so the interpolated
/// quantile and inclusive ES tie convention apply unchanged.
///
/// # Errors
///
/// Propagates the estimator's validation (empty sample, bad alpha).
pub fn credit_var_es(losses: &LossSample, alpha: f64) -> CreditResult<RiskResult> {
    Ok(var_es(losses.as_slice(), alpha)?)
}
