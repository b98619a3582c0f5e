//! Market Data Adapters
//!
//! External data sources for live prices:
//! - `CoinGeckoClient`: `simple/price` client for the recognized assets
//!
//! Only tickers listed in the price API id table are ever requested; anything
//! else resolves to "no live data" without a network call.

mod coingecko;

pub use coingecko::{CoinGeckoClient, PriceError, COINGECKO_API};
