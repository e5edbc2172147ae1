//! # tailrisk-credit
//!
//! Credit risk analytics over a rated bond portfolio.
//!
//! This crate provides:
//!
//! - **Reference tables**: exposures, ratings and a rating → PD mapping
//!   with referential integrity enforced up front
//! - **Expected loss**: the closed-form EL = PD × LGD × Exposure, per
//!   obligor and portfolio-wide
//! - **Default simulation**: independent Bernoulli defaults per obligor,
//!   aggregated into a portfolio credit-loss sample
//!
//! The simulated [`LossSample`](tailrisk_measures::types::LossSample) feeds
//! the quantile estimator in `tailrisk-measures` for credit VaR/ES.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tailrisk_credit::prelude::*;
//!
//! let exposures = ExposureTable::new([("Bond_A", 1_000_000.0), ("Bond_B", 500_000.0)])?;
//! let ratings = RatingTable::new([("Bond_A", "BBB"), ("Bond_B", "BB")]);
//! let pd_table = PdTable::standard();
//!
//! let el = portfolio_expected_loss(&exposures, &ratings, &pd_table, DEFAULT_LGD)?;
//! assert!(el > 0.0);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let losses = simulate_credit_losses(&exposures, &ratings, &pd_table, DEFAULT_LGD, 10_000, &mut rng)?;
//! let risk = credit_var_es(&losses, 0.95)?;
//! assert!(risk.es >= risk.var);
//! # Ok::<(), tailrisk_credit::CreditError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod expected_loss;
pub mod simulate;
pub mod tables;
mod error;

pub use error::{CreditError, CreditResult};

/// Default loss-given-default fraction (60% of exposure lost on default).
pub const DEFAULT_LGD: f64 = 0.60;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::expected_loss::{expected_loss, portfolio_expected_loss};
    pub use crate::simulate::{credit_var_es, simulate_credit_losses};
    pub use crate::tables::{ExposureTable, PdTable, RatingTable};
    pub use crate::{CreditError, CreditResult, DEFAULT_LGD};
}
