//! Credit-sim command implementation.
//!
//! Reads a rated portfolio, prints the analytic expected loss and the
//! simulated credit VaR/ES.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use tailrisk_credit::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{build_rng, validate_alpha};
use crate::error::CliError;
use crate::output::{print_header, print_output};

/// Arguments for the credit-sim command.
#[derive(Args, Debug)]
pub struct CreditSimArgs {
    /// Portfolio CSV (columns: obligor, exposure, rating)
    #[arg(short, long)]
    pub portfolio: PathBuf,

    /// Loss given default, as a fraction of exposure
    #[arg(short, long, default_value = "0.6")]
    pub lgd: f64,

    /// Confidence level
    #[arg(short, long, default_value = "0.95")]
    pub alpha: f64,

    /// Simulation trial count
    #[arg(short = 'n', long, default_value = "100000")]
    pub sims: usize,

    /// Generator seed for a reproducible simulation
    #[arg(long)]
    pub seed: Option<u64>,
}

/// A row of the input portfolio file.
#[derive(Debug, Deserialize)]
struct PortfolioRow {
    obligor: String,
    exposure: f64,
    rating: String,
}

/// One output metric row.
#[derive(Debug, Serialize, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl MetricRow {
    fn money(metric: &str, value: f64) -> Self {
        Self {
            metric: metric.to_string(),
            value: format!("{value:.2}"),
        }
    }
}

/// Execute the credit-sim command.
pub fn execute(args: CreditSimArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let alpha = validate_alpha(args.alpha)?;
    let (exposures, ratings) = read_portfolio(&args.portfolio)
        .with_context(|| format!("loading portfolio from {}", args.portfolio.display()))?;
    let pd_table = PdTable::standard();

    let el = portfolio_expected_loss(&exposures, &ratings, &pd_table, args.lgd)?;

    let mut rng = build_rng(args.seed);
    let losses = simulate_credit_losses(
        &exposures,
        &ratings,
        &pd_table,
        args.lgd,
        args.sims,
        &mut rng,
    )?;
    let risk = credit_var_es(&losses, alpha)?;

    print_header(
        &format!(
            "Credit loss (1Y, {} obligors, {} trials)",
            exposures.len(),
            args.sims
        ),
        quiet,
    );
    let rows = [
        MetricRow::money("Expected loss", el),
        MetricRow::money(&format!("VaR {:.0}%", alpha * 100.0), risk.var),
        MetricRow::money(&format!("ES {:.0}%", alpha * 100.0), risk.es),
    ];
    print_output(&rows, format)
}

/// Reads obligor/exposure/rating rows into the credit tables.
fn read_portfolio(path: &Path) -> Result<(ExposureTable, RatingTable)> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut exposures = Vec::new();
    let mut ratings = Vec::new();
    for (index, record) in reader.deserialize::<PortfolioRow>().enumerate() {
        let row: PortfolioRow = record.map_err(|e| CliError::InvalidPortfolioRow {
            row: index + 2,
            reason: e.to_string(),
        })?;
        exposures.push((row.obligor.clone(), row.exposure));
        ratings.push((row.obligor, row.rating));
    }

    let exposures = ExposureTable::new(exposures)?;
    let ratings = RatingTable::new(ratings);
    Ok((exposures, ratings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_portfolio() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "obligor,exposure,rating").unwrap();
        writeln!(file, "Bond_A,1000000,BBB").unwrap();
        writeln!(file, "Bond_B,750000,BB").unwrap();

        let (exposures, ratings) = read_portfolio(file.path()).unwrap();
        assert_eq!(exposures.len(), 2);
        assert_eq!(ratings.get("Bond_B"), Some("BB"));
    }

    #[test]
    fn test_read_portfolio_bad_exposure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "obligor,exposure,rating").unwrap();
        writeln!(file, "Bond_A,-5,BBB").unwrap();

        assert!(read_portfolio(file.path()).is_err());
    }
}
