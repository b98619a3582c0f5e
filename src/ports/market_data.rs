use async_trait::async_trait;
use thiserror::Error;

use crate::domain::LiveQuote;

/// Market data error type
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("REST API error: {0}")]
    RestError(String),

    #[error("Unexpected HTTP status: {0}")]
    BadStatus(u16),

    #[error("Data parsing error: {0}")]
    ParseError(String),
}

/// Live price source for recognized assets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceFeedPort: Send + Sync {
    /// Fetch the live quote for a ticker.
    ///
    /// `Ok(None)` means the ticker is not tracked by this feed.
    async fn live_quote(&self, symbol: &str) -> Result<Option<LiveQuote>, MarketDataError>;
}

/// Feed that tracks nothing; every asset keeps its curated values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflinePriceFeed;

#[async_trait]
impl PriceFeedPort for OfflinePriceFeed {
    async fn live_quote(&self, _symbol: &str) -> Result<Option<LiveQuote>, MarketDataError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_feed_tracks_nothing() {
        let feed = OfflinePriceFeed;
        assert!(feed.live_quote("SOL").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_automock_port() {
        let mut feed = MockPriceFeedPort::new();
        feed.expect_live_quote()
            .withf(|symbol| symbol.to_string() == "ETH")
            .times(1)
            .returning(|_| Err(MarketDataError::BadStatus(429)));

        let err = feed.live_quote("ETH").await.unwrap_err();
        assert!(matches!(err, MarketDataError::BadStatus(429)));
    }
}
