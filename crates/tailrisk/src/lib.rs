//! # tailrisk
//!
//! Facade crate for the Tailrisk portfolio risk analytics library.
//!
//! Re-exports the public API of the member crates so applications can
//! depend on a single crate:
//!
//! - [`measures`]: VaR/ES estimation (historical, parametric, Monte Carlo)
//! - [`credit`]: expected loss and Bernoulli-default credit simulation
//! - [`data`]: CSV price loading and return transforms
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tailrisk::prelude::*;
//!
//! // Market side: three VaR/ES estimates over one return series.
//! let returns = [0.004, -0.012, 0.007, -0.003, 0.009, -0.015, 0.001, 0.006];
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = market_risk_report(&returns, 0.95, 10_000, &mut rng)?;
//! assert!(report.historical.es >= report.historical.var);
//!
//! // Credit side: expected loss and simulated tail risk.
//! let exposures = ExposureTable::new([("Bond_A", 1_000_000.0)])?;
//! let ratings = RatingTable::new([("Bond_A", "BBB")]);
//! let losses = simulate_credit_losses(
//!     &exposures, &ratings, &PdTable::standard(), DEFAULT_LGD, 10_000, &mut rng,
//! )?;
//! let credit = credit_var_es(&losses, 0.95)?;
//! assert!(credit.es >= credit.var);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use tailrisk_credit as credit;
pub use tailrisk_data as data;
pub use tailrisk_measures as measures;

/// Prelude combining the member crates' preludes.
pub mod prelude {
    pub use tailrisk_credit::prelude::*;
    pub use tailrisk_data::prelude::*;
    pub use tailrisk_measures::prelude::*;
}
