//! Daily log returns and portfolio aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{DataError, DataResult};
use crate::prices::PriceTable;

/// Daily log returns per ticker, aligned on a common date index.
///
/// One row fewer than the price table it was derived from (the first
/// price has no predecessor).
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ReturnTable {
    /// Number of return observations per ticker.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date index (starting at the second price date).
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Ticker column names.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// The return series for one ticker.
    pub fn column(&self, ticker: &str) -> Option<&[f64]> {
        self.tickers
            .iter()
            .position(|t| t == ticker)
            .map(|i| self.columns[i].as_slice())
    }
}

/// Computes daily log returns: rₜ = ln(Pₜ / Pₜ₋₁).
///
/// # Errors
///
/// Fails on fewer than 2 price rows, or on a non-positive price (the log
/// is undefined; bad data must not slip through as NaN).
pub fn log_returns(prices: &PriceTable) -> DataResult<ReturnTable> {
    if prices.len() < 2 {
        return Err(DataError::invalid_input(format!(
            "need at least 2 price rows to compute returns, got {}",
            prices.len()
        )));
    }

    let mut columns = Vec::with_capacity(prices.tickers().len());
    for ticker in prices.tickers() {
        let series = prices.column(ticker).expect("tickers come from the table");
        if let Some(&bad) = series.iter().find(|p| **p <= 0.0) {
            return Err(DataError::invalid_input(format!(
                "non-positive price {bad} for ticker '{ticker}'"
            )));
        }
        let returns: Vec<f64> = series.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
        columns.push(returns);
    }

    Ok(ReturnTable {
        dates: prices.dates()[1..].to_vec(),
        tickers: prices.tickers().to_vec(),
        columns,
    })
}

/// Aggregates per-asset returns into a single portfolio return series.
///
/// Weights are renormalized to sum to 1 here, at the boundary; the risk
/// core never sees raw weights. Each portfolio return is the weighted sum
/// of the asset returns on that date.
///
/// # Errors
///
/// Fails when a weighted ticker is missing from the table, when the
/// weight sum is zero or non-finite, or when there are no weights at all.
pub fn portfolio_returns(
    returns: &ReturnTable,
    weights: &BTreeMap<String, f64>,
) -> DataResult<Vec<f64>> {
    if weights.is_empty() {
        return Err(DataError::invalid_input("no portfolio weights given"));
    }

    let total: f64 = weights.values().sum();
    if !total.is_finite() || total == 0.0 {
        return Err(DataError::invalid_input(format!(
            "portfolio weights must sum to a non-zero finite value, got {total}"
        )));
    }

    let missing: Vec<String> = weights
        .keys()
        .filter(|t| returns.column(t).is_none())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(DataError::MissingTickers { tickers: missing });
    }

    let mut portfolio = vec![0.0; returns.len()];
    for (ticker, weight) in weights {
        let normalized = weight / total;
        let series = returns.column(ticker).expect("presence checked above");
        for (acc, r) in portfolio.iter_mut().zip(series) {
            *acc += normalized * r;
        }
    }
    Ok(portfolio)
}
