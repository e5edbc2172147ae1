//! Tailrisk CLI - Command-line interface for portfolio risk analytics.
//!
//! # Usage
//!
//! ```bash
//! # Market VaR/ES over a price history
//! tailrisk market-var --prices prices.csv --weights SPY=0.5,LQD=0.3,IEF=0.2
//!
//! # Credit loss simulation for a rated portfolio
//! tailrisk credit-sim --portfolio portfolio.csv --sims 50000 --seed 42
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::MarketVar(args) => commands::market_var::execute(args, format, quiet)?,
        Commands::CreditSim(args) => commands::credit_sim::execute(args, format, quiet)?,
    }

    Ok(())
}
