//! Funding Radar - Main Entry Point
//!
//! Fetches funding rates from all venues, prints per-venue top/bottom
//! tables and the ranked cross-venue discrepancy report, then exits.

use anyhow::Result;
use clap::Parser;
use funding_radar::config::Config;
use funding_radar::exchange::{AevoClient, DydxClient, FundingSource, HyperliquidClient};
use funding_radar::rates::{diff_tables, rank, select_best};
use funding_radar::report::{render_discrepancies, render_rate_table};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Funding Radar CLI
#[derive(Parser)]
#[command(name = "funding-radar")]
#[command(version, about = "Cross-exchange perpetual funding rate scanner")]
struct Cli {
    /// How many top and bottom rates to print per venue
    #[arg(short, long, default_value = "10")]
    top: usize,

    /// Maximum in-flight requests during the Aevo per-instrument fan-out
    #[arg(long, default_value = "20")]
    max_inflight: usize,

    /// Delay in milliseconds before each Aevo fan-out request
    #[arg(long, default_value = "500")]
    request_delay_ms: u64,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::default();
    config.report.top_n = cli.top;
    config.aevo.max_inflight = cli.max_inflight;
    config.aevo.request_delay_ms = cli.request_delay_ms;
    config.validate()?;

    let aevo = AevoClient::new(&config.aevo)?;
    let dydx = DydxClient::new(&config.dydx)?;
    let hyperliquid = HyperliquidClient::new(&config.hyperliquid)?;

    info!("fetching funding rates from all venues");

    // Venues are independent; any single failure aborts the run before
    // anything is reported.
    let (aevo_table, dydx_table, hl_table) =
        tokio::try_join!(aevo.fetch(), dydx.fetch(), hyperliquid.fetch())?;

    let tables = vec![aevo_table, dydx_table, hl_table];
    for table in &tables {
        info!(venue = %table.venue(), assets = table.len(), "fetched rate table");
    }

    let n = config.report.top_n;
    println!("\ntop/bottom {n} hourly funding rates per venue:\n");
    for table in &tables {
        println!("{}", render_rate_table(table, n));
    }

    let series = diff_tables(&tables);
    let ranked = rank(select_best(&series));

    println!("best cross-venue discrepancy per asset:\n");
    println!("{}", render_discrepancies(&ranked));

    Ok(())
}
