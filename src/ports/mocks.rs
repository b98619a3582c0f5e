use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;

use crate::domain::LiveQuote;
use super::market_data::{MarketDataError, PriceFeedPort};

/// Mock price feed that records calls and allows controlled responses
#[derive(Debug, Default, Clone)]
pub struct MockPriceFeed {
    calls: Arc<Mutex<Vec<String>>>,
    quotes: Arc<Mutex<HashMap<String, LiveQuote>>>,
    failures: Arc<Mutex<HashMap<String, u16>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
}

impl MockPriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a quote for a given symbol
    pub fn with_quote(self, symbol: &str, quote: LiveQuote) -> Self {
        self.set_quote(symbol, quote);
        self
    }

    /// Builder method to make a symbol fail with an HTTP status
    pub fn with_failure(self, symbol: &str, status: u16) -> Self {
        self.failures.lock().unwrap().insert(symbol.to_string(), status);
        self
    }

    /// Builder method to hold responses for a symbol
    pub fn with_delay(self, symbol: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(symbol.to_string(), delay);
        self
    }

    /// Replace the quote served for a symbol
    pub fn set_quote(&self, symbol: &str, quote: LiveQuote) {
        self.quotes.lock().unwrap().insert(symbol.to_string(), quote);
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, symbol: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|s| *s == symbol).count()
    }
}

#[async_trait]
impl PriceFeedPort for MockPriceFeed {
    async fn live_quote(&self, symbol: &str) -> Result<Option<LiveQuote>, MarketDataError> {
        self.calls.lock().unwrap().push(symbol.to_string());

        let delay = self.delays.lock().unwrap().get(symbol).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().get(symbol).copied();
        if let Some(status) = failure {
            return Err(MarketDataError::BadStatus(status));
        }

        Ok(self.quotes.lock().unwrap().get(symbol).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(usd: f64) -> LiveQuote {
        LiveQuote {
            usd,
            usd_market_cap: 1.0,
            usd_24h_vol: 1.0,
            usd_24h_change: 0.0,
        }
    }

    #[test]
    fn test_mock_price_feed() {
        let mock = MockPriceFeed::new().with_quote("SOL", quote(150.0));

        let result = tokio_test::block_on(mock.live_quote("SOL")).unwrap();
        assert_eq!(result.map(|q| q.usd), Some(150.0));

        let missing = tokio_test::block_on(mock.live_quote("PEPE")).unwrap();
        assert!(missing.is_none());
        assert_eq!(mock.get_calls(), vec!["SOL".to_string(), "PEPE".to_string()]);
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockPriceFeed::new().with_failure("BTC", 503);

        let result = tokio_test::block_on(mock.live_quote("BTC"));
        assert!(matches!(result, Err(MarketDataError::BadStatus(503))));
        assert_eq!(mock.call_count("BTC"), 1);
    }
}
