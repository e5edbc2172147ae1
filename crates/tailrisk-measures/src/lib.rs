//! # tailrisk-measures
//!
//! Risk measures over loss distributions.
//!
//! This crate provides the estimation core of the Tailrisk library:
//!
//! - **Quantile estimator**: interpolated VaR and tail-conditional ES over
//!   an arbitrary loss sample
//! - **Historical VaR/ES**: empirical loss distribution from a return series
//! - **Parametric VaR/ES**: closed-form normal (variance-covariance) method
//! - **Monte Carlo VaR/ES**: normal simulation with an injected generator
//!
//! All losses are expressed as positive numbers (loss = negative return).
//! Simulation entry points take `&mut impl Rng` so results are reproducible
//! under a caller-supplied seed.
//!
//! ## Example
//!
//! ```
//! use tailrisk_measures::prelude::*;
//!
//! let returns = [0.01, -0.02, 0.005, -0.015, 0.0, 0.012, -0.007];
//! let result = historical_var_es(&returns, 0.95)?;
//! assert!(result.es >= result.var);
//! # Ok::<(), tailrisk_measures::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod quantile;
pub mod types;
pub mod var;
mod error;

pub use error::{MeasuresResult, RiskError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::quantile::var_es;
    pub use crate::types::{LossSample, RiskResult};
    pub use crate::var::{
        historical_losses, historical_var_es, market_risk_report, monte_carlo_losses,
        monte_carlo_var_es, parametric_var_es, MarketRiskReport,
    };
    pub use crate::{MeasuresResult, RiskError};
}
