//! CR4SH - meme token dashboard core
//!
//! Deterministic fake market data for any search string, live prices for a
//! handful of real assets, and the timer-driven parody installer screen.
//!
//! # Modules
//!
//! - `domain`: Hashing, seeded draws, metric and trade synthesis, known assets
//! - `ports`: Trait abstractions (PriceFeedPort)
//! - `adapters`: External implementations (CoinGecko, chart links, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Dashboard and installer controllers, owned timers

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
