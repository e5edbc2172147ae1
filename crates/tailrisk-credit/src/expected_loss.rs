//! Analytic (non-simulated) expected credit loss.

use crate::error::{CreditError, CreditResult};
use crate::tables::{resolve_obligors, ExposureTable, PdTable, RatingTable};

/// Single-obligor expected loss: EL = Exposure × PD × LGD.
///
/// Deterministic closed form; `expected_loss(1_000_000.0, 0.01, 0.6)` is
/// exactly 6000.0.
pub fn expected_loss(exposure: f64, pd: f64, lgd: f64) -> f64 {
    exposure * pd * lgd
}

/// Portfolio expected loss: Σ expected_loss over all obligors.
///
/// As the simulation trial count grows, the mean of
/// [`simulate_credit_losses`](crate::simulate::simulate_credit_losses)
/// converges to this value.
///
/// # Errors
///
/// Referential integrity is enforced before anything is summed:
/// [`CreditError::MissingRating`] / [`CreditError::UnknownRating`] on
/// broken table links, [`CreditError::InvalidInput`] when `lgd` is outside
/// \[0, 1\].
pub fn portfolio_expected_loss(
    exposures: &ExposureTable,
    ratings: &RatingTable,
    pd_table: &PdTable,
    lgd: f64,
) -> CreditResult<f64> {
    validate_lgd(lgd)?;
    let obligors = resolve_obligors(exposures, ratings, pd_table)?;
    Ok(obligors
        .iter()
        .map(|o| expected_loss(o.exposure, o.pd, lgd))
        .sum())
}

pub(crate) fn validate_lgd(lgd: f64) -> CreditResult<()> {
    if !lgd.is_finite() || !(0.0..=1.0).contains(&lgd) {
        return Err(CreditError::invalid_input(format!(
            "lgd must be in [0, 1], got {lgd}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_obligor_el_exact() {
        assert_eq!(expected_loss(1_000_000.0, 0.01, 0.6), 6000.0);
    }

    #[test]
    fn test_portfolio_el_sums_obligors() {
        let exposures =
            ExposureTable::new([("Bond_A", 1_000_000.0), ("Bond_B", 750_000.0)]).unwrap();
        let ratings = RatingTable::new([("Bond_A", "BBB"), ("Bond_B", "BB")]);

        let el =
            portfolio_expected_loss(&exposures, &ratings, &PdTable::standard(), 0.6).unwrap();

        // 1,000,000 * 0.01 * 0.6 + 750,000 * 0.03 * 0.6
        assert_relative_eq!(el, 6000.0 + 13_500.0);
    }

    #[test]
    fn test_lgd_out_of_range() {
        let exposures = ExposureTable::new([("Bond_A", 1000.0)]).unwrap();
        let ratings = RatingTable::new([("Bond_A", "A")]);

        for lgd in [-0.1, 1.1, f64::NAN] {
            let result = portfolio_expected_loss(&exposures, &ratings, &PdTable::standard(), lgd);
            assert!(result.is_err(), "lgd={lgd}");
        }
    }

    #[test]
    fn test_integrity_error_propagates() {
        let exposures = ExposureTable::new([("Bond_A", 1000.0)]).unwrap();
        let ratings = RatingTable::new([("Bond_A", "NOT_A_RATING")]);

        let err =
            portfolio_expected_loss(&exposures, &ratings, &PdTable::standard(), 0.6).unwrap_err();
        assert!(matches!(err, CreditError::UnknownRating { .. }));
    }
}
