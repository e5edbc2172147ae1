//! Command implementations.

pub mod credit_sim;
pub mod market_var;

pub use credit_sim::CreditSimArgs;
pub use market_var::MarketVarArgs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::CliError;

/// Validates a confidence level from the command line.
pub fn validate_alpha(alpha: f64) -> Result<f64, CliError> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(CliError::InvalidAlpha(alpha));
    }
    Ok(alpha)
}

/// Builds the simulation generator: seeded when `--seed` was given,
/// entropy-seeded otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
