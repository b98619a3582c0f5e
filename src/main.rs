//! cr4sh - Meme token dashboard
//!
//! Deterministic fake token data for any search string, live prices for SOL,
//! BTC and ETH, and the parody installer.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use cr4sh::adapters::cli::{self, load_app_config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (COINGECKO_API_URL and friends)
    dotenvy::dotenv().ok();

    let app = cli::init();
    let config = load_app_config(&app)?;
    init_logging(app.verbose, app.debug, &config.logging.level)?;

    cli::execute(app, config).await
}

fn init_logging(verbose: bool, debug: bool, configured: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new(configured)
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}
