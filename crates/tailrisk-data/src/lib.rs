//! # tailrisk-data
//!
//! Price data loading and return transforms for the Tailrisk library.
//!
//! This crate is the data boundary in front of the risk core:
//!
//! - **Price tables**: CSV-backed daily price series per ticker, with a
//!   cache-or-fetch layer behind the [`PriceSource`] trait
//! - **Return transforms**: daily log returns and weighted aggregation
//!   into a single portfolio return series
//!
//! The core crates (`tailrisk-measures`, `tailrisk-credit`) only ever see
//! clean, validated series produced here; the "try cache, fall back to a
//! fresh fetch" behaviour never leaks past this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod prices;
pub mod returns;
mod error;

pub use error::{DataError, DataResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::prices::{load_or_fetch, PriceSource, PriceTable};
    pub use crate::returns::{log_returns, portfolio_returns, ReturnTable};
    pub use crate::{DataError, DataResult};
}
