//! Configuration Loader
//!
//! Loads and validates configuration from TOML files. Every section is
//! optional and falls back to the public endpoints and a 30 second refresh.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::chart::DEXSCREENER_URL;
use crate::adapters::market_data::COINGECKO_API;

/// Main configuration structure matching cr4sh.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub price_api: PriceApiSection,
    #[serde(default)]
    pub refresh: RefreshSection,
    #[serde(default)]
    pub chart: ChartSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Live price API section
#[derive(Debug, Clone, Deserialize)]
pub struct PriceApiSection {
    /// Base URL of the CoinGecko-compatible API
    #[serde(default = "default_price_api_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PriceApiSection {
    fn default() -> Self {
        Self {
            base_url: default_price_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PriceApiSection {
    /// Get base URL with environment variable override
    /// Checks COINGECKO_API_URL env var first, falls back to config value
    pub fn get_base_url(&self) -> String {
        std::env::var("COINGECKO_API_URL").unwrap_or_else(|_| self.base_url.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Live refresh loop section
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshSection {
    /// Poll period for recognized assets, in seconds
    #[serde(default = "default_refresh_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_secs(),
        }
    }
}

impl RefreshSection {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Chart widget section
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSection {
    #[serde(default = "default_chart_url")]
    pub base_url: String,
    /// Widget theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            base_url: default_chart_url(),
            theme: default_theme(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_price_api_url() -> String {
    COINGECKO_API.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_refresh_secs() -> u64 {
    30
}

fn default_chart_url() -> String {
    DEXSCREENER_URL.to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration, using defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "price_api.base_url cannot be empty".to_string(),
            ));
        }

        if self.price_api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "price_api.timeout_secs must be > 0".to_string(),
            ));
        }

        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "refresh.interval_secs must be > 0, got {}",
                self.refresh.interval_secs
            )));
        }

        if self.chart.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "chart.base_url cannot be empty".to_string(),
            ));
        }

        if !["dark", "light"].contains(&self.chart.theme.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "chart.theme must be dark or light, got {}",
                self.chart.theme
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got {}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
