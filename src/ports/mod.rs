//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Live price data for recognized assets

pub mod market_data;
pub mod mocks;

pub use market_data::{MarketDataError, OfflinePriceFeed, PriceFeedPort};
pub use mocks::MockPriceFeed;
