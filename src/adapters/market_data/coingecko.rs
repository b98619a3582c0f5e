use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{price_api_id, LiveQuote};
use crate::ports::{MarketDataError, PriceFeedPort};

pub const COINGECKO_API: &str = "https://api.coingecko.com";

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Price API returned {0}")]
    BadStatus(StatusCode),
    #[error("No price data for id: {0}")]
    NoPriceData(String),
    #[error("Incomplete price data for id: {0}")]
    Incomplete(String),
}

impl From<PriceError> for MarketDataError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::HttpError(e) => MarketDataError::RestError(e.to_string()),
            PriceError::BadStatus(status) => MarketDataError::BadStatus(status.as_u16()),
            other => MarketDataError::ParseError(other.to_string()),
        }
    }
}

/// Client for the `simple/price` endpoint
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Result<Self, PriceError> {
        Self::with_config(COINGECKO_API, Duration::from_secs(10))
    }

    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PriceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a single asset id, in USD with cap, volume and change
    pub fn price_url(&self, id: &str) -> String {
        format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd&include_market_cap=true&include_24hr_change=true&include_24hr_vol=true",
            self.base_url, id
        )
    }

    /// Get the live quote for a price API id
    pub async fn get_simple_price(&self, id: &str) -> Result<LiveQuote, PriceError> {
        let response = self.http
            .get(self.price_url(id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::BadStatus(status));
        }

        let body: SimplePriceResponse = response.json().await?;
        quote_from_response(body, id)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new().expect("Failed to create CoinGeckoClient")
    }
}

#[async_trait]
impl PriceFeedPort for CoinGeckoClient {
    async fn live_quote(&self, symbol: &str) -> Result<Option<LiveQuote>, MarketDataError> {
        let Some(id) = price_api_id(symbol) else {
            return Ok(None);
        };

        tracing::debug!("Fetching live price for {} ({})", symbol, id);
        let quote = self.get_simple_price(id).await?;
        Ok(Some(quote))
    }
}

type SimplePriceResponse = HashMap<String, SimplePrice>;

#[derive(Debug, Deserialize)]
struct SimplePrice {
    usd: Option<f64>,
    usd_market_cap: Option<f64>,
    usd_24h_vol: Option<f64>,
    usd_24h_change: Option<f64>,
}

fn quote_from_response(mut body: SimplePriceResponse, id: &str) -> Result<LiveQuote, PriceError> {
    let data = body
        .remove(id)
        .ok_or_else(|| PriceError::NoPriceData(id.to_string()))?;

    match (data.usd, data.usd_market_cap, data.usd_24h_vol, data.usd_24h_change) {
        (Some(usd), Some(usd_market_cap), Some(usd_24h_vol), Some(usd_24h_change)) => Ok(LiveQuote {
            usd,
            usd_market_cap,
            usd_24h_vol,
            usd_24h_change,
        }),
        _ => Err(PriceError::Incomplete(id.to_string())),
    }
}
