//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Market Data: CoinGecko live price client
//! - Chart: dexscreener embed and bags.fm link builder
//! - CLI: Command-line interface handlers

pub mod chart;
pub mod cli;
pub mod market_data;

pub use chart::ChartLinks;
pub use cli::CliApp;
pub use market_data::CoinGeckoClient;
