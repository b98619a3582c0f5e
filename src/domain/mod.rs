//! Domain Layer - Deterministic token data synthesis
//!
//! Pure types and functions with no I/O:
//! - `seed`: string hasher and the seeded draw function
//! - `known_assets`: curated records and the price API symbol table
//! - `query`: search string resolution
//! - `metrics`: token metrics (placeholder, curated, synthesized, live overlay)
//! - `trades`: fabricated recent trades
//! - `format`: display formatting helpers

pub mod format;
pub mod known_assets;
pub mod metrics;
pub mod query;
pub mod seed;
pub mod trades;

pub use known_assets::{has_live_price, lookup, price_api_id, KnownAsset, KNOWN_ASSETS, PRICE_API_IDS};
pub use metrics::{LiveQuote, TokenMetrics};
pub use query::{resolve, ResolvedQuery};
pub use seed::{draw, hash, Seed};
pub use trades::{synthesize_trades, TradeRecord, TradeSide};
