//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the cr4sh dashboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::chart::{details_url, trades_url, ChartLinks};
use crate::adapters::market_data::CoinGeckoClient;
use crate::application::{DashboardController, DashboardState, InstallerController, SearchResult};
use crate::application::installer::{TELEGRAM_URL, TOKEN_PAGE_URL, TWITTER_URL};
use crate::config::{load_config_or_default, Config};
use crate::domain::TokenMetrics;

const PROGRESS_BAR_WIDTH: usize = 40;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// cr4sh - Meme token dashboard with deterministic fake market data
#[derive(Parser, Debug)]
#[command(
    name = "cr4sh",
    version = env!("CARGO_PKG_VERSION"),
    about = "Meme token dashboard with deterministic fake market data",
    long_about = "cr4sh turns any search string into a stable set of token metrics and \
                  recent trades. SOL, BTC and ETH show curated figures refreshed from a \
                  live price API."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE", default_value = "cr4sh.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a token name, ticker or contract address
    Search(SearchCmd),

    /// Search, then keep printing live price refreshes until Ctrl+C
    Watch(WatchCmd),

    /// Print the chart embed and explorer links for a token
    Chart(ChartCmd),

    /// Run the installer progress bar
    Install,

    /// Panic sell: blue screen, then restart
    Crash,
}

/// Search a token
#[derive(Parser, Debug)]
pub struct SearchCmd {
    /// Token name, ticker or contract address
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Watch a token
#[derive(Parser, Debug)]
pub struct WatchCmd {
    /// Token name, ticker or contract address
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Chart links
#[derive(Parser, Debug)]
pub struct ChartCmd {
    /// Token to chart; the landing chart when omitted
    #[arg(value_name = "TOKEN")]
    pub token: Option<String>,
}

/// Load the config file named on the command line, `~` expanded
pub fn load_app_config(app: &CliApp) -> Result<Config> {
    let path = shellexpand::tilde(&app.config.to_string_lossy()).to_string();
    load_config_or_default(&path).with_context(|| format!("Failed to load configuration from {}", path))
}

/// Execute the CLI command
pub async fn execute(app: CliApp, config: Config) -> Result<()> {
    match app.command {
        Command::Search(cmd) => search_command(cmd, &config).await,
        Command::Watch(cmd) => watch_command(cmd, &config).await,
        Command::Chart(cmd) => chart_command(cmd, &config),
        Command::Install => install_command().await,
        Command::Crash => crash_command().await,
    }
}

fn build_dashboard(config: &Config) -> Result<DashboardController> {
    let feed = CoinGeckoClient::with_config(config.price_api.get_base_url(), config.price_api.timeout())
        .context("Failed to create price API client")?;
    Ok(DashboardController::new(Arc::new(feed)).with_refresh_interval(config.refresh.interval()))
}

async fn search_command(cmd: SearchCmd, config: &Config) -> Result<()> {
    let dashboard = build_dashboard(config)?;
    let result = dashboard.search(&cmd.query).await;
    dashboard.shutdown().await;

    let Some(result) = result else {
        anyhow::bail!("No token data for '{}'", cmd.query.trim());
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result).context("Failed to serialize result")?);
    } else {
        print_result(&result);
    }
    Ok(())
}

async fn watch_command(cmd: WatchCmd, config: &Config) -> Result<()> {
    let dashboard = build_dashboard(config)?;
    let Some(result) = dashboard.search(&cmd.query).await else {
        anyhow::bail!("No token data for '{}'", cmd.query.trim());
    };
    print_result(&result);

    if !dashboard.is_refreshing().await {
        println!("\nNo live price for {}, nothing to watch", result.token.token_symbol);
        return Ok(());
    }
    println!("\nWatching {} (Ctrl+C to stop)", result.token.token_symbol);

    let mut last_seen = dashboard.state().await.last_updated;
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
            _ = ticker.tick() => {
                let state = dashboard.state().await;
                if state.last_updated != last_seen {
                    last_seen = state.last_updated;
                    print_refresh(&state);
                }
            }
        }
    }

    dashboard.shutdown().await;
    Ok(())
}

fn chart_command(cmd: ChartCmd, config: &Config) -> Result<()> {
    let links = ChartLinks::new(config.chart.base_url.clone(), config.chart.theme.clone());
    let token = cmd.token.as_deref().map(str::trim).filter(|t| !t.is_empty());

    println!("Chart:   {}", links.chart_url(token));
    if let Some(token) = token {
        println!("Trades:  {}", trades_url(token));
    }
    println!("Details: {}", details_url());
    Ok(())
}

async fn install_command() -> Result<()> {
    let installer = InstallerController::new();
    installer.agree(true).await;
    installer.install().await;
    println!("Installing CR4SH...");

    loop {
        tokio::time::sleep(POLL_INTERVAL).await;
        let state = installer.state().await;
        print!("\r{}", progress_bar(state.install_progress));
        std::io::stdout().flush().ok();
        if state.show_fire {
            println!("\n\n🔥🔥🔥 INSTALL COMPLETE. YOUR PORTFOLIO IS ON FIRE. 🔥🔥🔥");
            break;
        }
    }

    println!("\nX:        {}", TWITTER_URL);
    println!("Telegram: {}", TELEGRAM_URL);
    println!("Buy:      {}", TOKEN_PAGE_URL);
    installer.shutdown().await;
    Ok(())
}

async fn crash_command() -> Result<()> {
    let installer = InstallerController::new();
    installer.panic_sell().await;
    if installer.state().await.show_bsod {
        println!("A fatal exception 0E has occurred at 0028:C0011E36 in VXD CR4SH(01).");
        println!("Your bags have been terminated.\n");
    }
    tokio::time::sleep(Duration::from_secs(2)).await;

    installer.restart().await;
    println!("Restarting...");
    loop {
        tokio::time::sleep(POLL_INTERVAL).await;
        let state = installer.state().await;
        print!("\r{}", progress_bar(state.restart_progress));
        std::io::stdout().flush().ok();
        if !state.show_restart {
            println!("\nBack to the installer. Nothing was learned.");
            break;
        }
    }

    installer.shutdown().await;
    Ok(())
}

fn progress_bar(progress: u32) -> String {
    let filled = (progress.min(100) as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        " ".repeat(PROGRESS_BAR_WIDTH - filled),
        progress.min(100)
    )
}

fn print_result(result: &SearchResult) {
    print_token(&result.token);
    if result.trades.is_empty() {
        return;
    }
    println!("\nRecent trades:");
    for trade in &result.trades {
        println!("  {}", trade);
    }
}

fn print_token(token: &TokenMetrics) {
    println!("┌─────────────────────────────────────────────┐");
    println!("│  {:<43}│", format!("${}", token.token_symbol));
    println!("├─────────────────────────────────────────────┤");
    let rows = [
        ("Price", token.price.as_str()),
        ("24h", token.change_24h.as_str()),
        ("Market cap", token.market_cap.as_str()),
        ("Volume 24h", token.volume_24h.as_str()),
        ("Supply", token.total_supply.as_str()),
        ("Bonding", token.bonding_progress.as_str()),
        ("Graduation", token.graduation_target.as_str()),
        ("Holders", token.holders.as_str()),
        ("Contract", token.contract.as_str()),
        ("AI score", token.ai_score.as_str()),
        ("Risk", token.risk_level.as_str()),
    ];
    for (label, value) in rows {
        println!("│  {:<12}{:<31}│", label, value);
    }
    println!("└─────────────────────────────────────────────┘");

    if let Some(twitter) = &token.twitter {
        println!("Twitter: {}", twitter);
    }
    if let Some(website) = &token.website {
        println!("Website: {}", website);
    }
}

fn print_refresh(state: &DashboardState) {
    let at = state
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default();
    println!(
        "[{}] {} {} ({})  mc {}  vol {}",
        at,
        state.token.token_symbol,
        state.token.price,
        state.token.change_24h,
        state.token.market_cap,
        state.token.volume_24h
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let app = CliApp::try_parse_from(["cr4sh", "search", "pepe", "--json"]).unwrap();
        match app.command {
            Command::Search(cmd) => {
                assert_eq!(cmd.query, "pepe");
                assert!(cmd.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(app.config, PathBuf::from("cr4sh.toml"));
    }

    #[test]
    fn test_parse_global_flags() {
        let app = CliApp::try_parse_from(["cr4sh", "chart", "--debug", "--config", "other.toml"]).unwrap();
        assert!(app.debug);
        assert!(!app.verbose);
        assert_eq!(app.config, PathBuf::from("other.toml"));
        assert!(matches!(app.command, Command::Chart(ChartCmd { token: None })));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(CliApp::try_parse_from(["cr4sh", "search"]).is_err());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", " ".repeat(PROGRESS_BAR_WIDTH)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "█".repeat(PROGRESS_BAR_WIDTH)));
        assert!(progress_bar(50).starts_with(&format!("[{}", "█".repeat(20))));
        // restart progress may overshoot before the final tick clamps it
        assert_eq!(progress_bar(102), progress_bar(100));
    }

    #[test]
    fn test_load_app_config_missing_file() {
        let app = CliApp::try_parse_from(["cr4sh", "install", "--config", "/nonexistent/cr4sh.toml"]).unwrap();
        let config = load_app_config(&app).unwrap();
        assert_eq!(config.refresh.interval_secs, 30);
    }
}
