//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    ChartSection, Config, ConfigError, LoggingSection, PriceApiSection, RefreshSection,
    load_config, load_config_or_default,
};
