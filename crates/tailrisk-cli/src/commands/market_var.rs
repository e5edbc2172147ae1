//! Market-var command implementation.
//!
//! Loads a daily price history, aggregates it into a weighted portfolio
//! return series and prints 1-day VaR/ES from all three estimation
//! methods.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_data::prelude::*;
use tailrisk_measures::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{build_rng, validate_alpha};
use crate::error::CliError;
use crate::output::{print_header, print_output};

/// Arguments for the market-var command.
#[derive(Args, Debug)]
pub struct MarketVarArgs {
    /// Price history CSV (columns: date, then one per ticker)
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Portfolio weights, e.g. SPY=0.5,LQD=0.3,IEF=0.2 (renormalized)
    #[arg(short, long, value_delimiter = ',')]
    pub weights: Vec<String>,

    /// Confidence level
    #[arg(short, long, default_value = "0.95")]
    pub alpha: f64,

    /// Monte Carlo trial count
    #[arg(short = 'n', long, default_value = "100000")]
    pub sims: usize,

    /// Generator seed for a reproducible Monte Carlo estimate
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One output row per estimation method.
#[derive(Debug, Serialize, Tabled)]
struct MethodRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "VaR")]
    var: String,
    #[tabled(rename = "ES")]
    es: String,
}

impl MethodRow {
    fn new(method: &str, result: &RiskResult) -> Self {
        Self {
            method: method.to_string(),
            var: format!("{:.4}%", result.var * 100.0),
            es: format!("{:.4}%", result.es * 100.0),
        }
    }
}

/// Execute the market-var command.
pub fn execute(args: MarketVarArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let alpha = validate_alpha(args.alpha)?;
    let weights = parse_weights(&args.weights)?;

    let prices = PriceTable::read_csv(&args.prices)
        .with_context(|| format!("loading prices from {}", args.prices.display()))?;
    let returns = log_returns(&prices)?;
    let portfolio = portfolio_returns(&returns, &weights)?;

    let mut rng = build_rng(args.seed);
    let report = market_risk_report(&portfolio, alpha, args.sims, &mut rng)?;

    print_header(
        &format!(
            "Portfolio 1-day {:.0}% VaR / ES ({} observations)",
            alpha * 100.0,
            portfolio.len()
        ),
        quiet,
    );
    let rows = [
        MethodRow::new("Historical", &report.historical),
        MethodRow::new("Parametric", &report.parametric),
        MethodRow::new("Monte Carlo", &report.monte_carlo),
    ];
    print_output(&rows, format)
}

/// Parses TICKER=WEIGHT pairs into a weight map.
fn parse_weights(specs: &[String]) -> Result<BTreeMap<String, f64>, CliError> {
    let mut weights = BTreeMap::new();
    for spec in specs {
        let (ticker, weight) = spec
            .split_once('=')
            .ok_or_else(|| CliError::InvalidWeight(spec.clone()))?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidWeight(spec.clone()))?;
        weights.insert(ticker.trim().to_string(), weight);
    }
    if weights.is_empty() {
        return Err(CliError::InvalidWeight("<none>".to_string()));
    }
    Ok(weights)
}
