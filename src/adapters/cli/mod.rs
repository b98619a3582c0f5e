//! CLI Adapter
//!
//! Command-line interface for the cr4sh dashboard.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{load_app_config, ChartCmd, CliApp, Command, SearchCmd, WatchCmd};

use anyhow::Result;

use crate::config::Config;

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}

/// Execute the CLI command
pub async fn execute(app: CliApp, config: Config) -> Result<()> {
    commands::execute(app, config).await
}
