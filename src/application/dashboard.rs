//! Dashboard Controller
//!
//! Owns the dashboard state and its live refresh timer. A search resolves the
//! query, produces curated or synthesized token data, replaces the previous
//! result wholesale and, for tickers with a live price, starts polling.
//!
//! Each search bumps a generation counter. A search or refresh that finishes
//! after a newer search started sees a stale generation and discards its
//! result, so late responses never touch the newer token's state.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{
    has_live_price, resolve, synthesize_trades, ResolvedQuery, Seed, TokenMetrics, TradeRecord,
};
use crate::ports::PriceFeedPort;
use super::timer::{FirstTick, TimerHandle};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Search query is blank")]
    EmptyQuery,
    #[error("Search {generation} superseded by a newer search")]
    Superseded { generation: u64 },
}

/// Outcome of a completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Trimmed search string as entered
    pub query: String,
    pub token: TokenMetrics,
    pub trades: Vec<TradeRecord>,
    /// Curated known-asset record rather than synthesized data
    pub known: bool,
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub current_token: Option<String>,
    pub has_searched: bool,
    pub is_loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub token: TokenMetrics,
    pub trades: Vec<TradeRecord>,
    #[serde(skip)]
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            current_token: None,
            has_searched: false,
            is_loading: false,
            last_updated: None,
            token: TokenMetrics::placeholder(),
            trades: Vec::new(),
            generation: 0,
        }
    }
}

impl DashboardState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear the previous result and show the loading placeholder
    fn begin_search(&mut self, generation: u64) {
        *self = Self {
            is_loading: true,
            generation,
            ..Self::default()
        };
    }

    fn complete(&mut self, result: &SearchResult) {
        self.current_token = Some(result.query.clone());
        self.token = result.token.clone();
        self.trades = result.trades.clone();
        self.has_searched = true;
        self.is_loading = false;
    }

    fn fail(&mut self) {
        self.is_loading = false;
    }
}

/// Dashboard state owner and live refresh coordinator
pub struct DashboardController {
    feed: Arc<dyn PriceFeedPort>,
    state: Arc<RwLock<DashboardState>>,
    generation: Arc<AtomicU64>,
    refresh: Mutex<Option<TimerHandle>>,
    refresh_interval: Duration,
}

impl DashboardController {
    pub fn new(feed: Arc<dyn PriceFeedPort>) -> Self {
        Self {
            feed,
            state: Arc::new(RwLock::new(DashboardState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            refresh: Mutex::new(None),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Set custom refresh interval
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Get current state snapshot
    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Whether a live refresh timer is currently running
    pub async fn is_refreshing(&self) -> bool {
        self.refresh
            .lock()
            .await
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Run a search. Blank input is ignored.
    ///
    /// Returns `None` when the search produced no data or was superseded by a
    /// newer search before it finished.
    pub async fn search(&self, raw_query: &str) -> Option<SearchResult> {
        let query = raw_query.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring blank search");
            return None;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_refresh().await;
        self.state.write().await.begin_search(generation);
        tracing::info!("Search #{} for '{}'", generation, query);

        match self.search_inner(query, generation).await {
            Ok(result) => {
                let symbol = result.token.token_symbol.clone();
                self.start_refresh(generation, symbol).await;
                Some(result)
            }
            Err(DashboardError::Superseded { generation }) => {
                tracing::debug!("Search #{} superseded, discarding result", generation);
                None
            }
            Err(e) => {
                tracing::warn!("Search for '{}' produced no data: {}", query, e);
                let mut state = self.state.write().await;
                if state.generation == generation {
                    state.fail();
                }
                None
            }
        }
    }

    async fn search_inner(&self, query: &str, generation: u64) -> Result<SearchResult, DashboardError> {
        let resolved = resolve(query).ok_or(DashboardError::EmptyQuery)?;
        let result = self.build_result(query, &resolved).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            return Err(DashboardError::Superseded { generation });
        }
        state.complete(&result);
        Ok(result)
    }

    async fn build_result(&self, query: &str, resolved: &ResolvedQuery) -> SearchResult {
        if let Some(asset) = resolved.known {
            let mut token = TokenMetrics::curated(asset);
            match self.feed.live_quote(&resolved.symbol).await {
                Ok(Some(quote)) => token.apply_live(&quote),
                Ok(None) => {}
                Err(e) => tracing::warn!(
                    "Live price for {} unavailable, using curated values: {}",
                    resolved.symbol, e
                ),
            }
            return SearchResult {
                query: query.to_string(),
                token,
                trades: Vec::new(),
                known: true,
            };
        }

        let token = TokenMetrics::synthesize(Seed::from_input(&resolved.address), resolved);
        let trades = synthesize_trades(Seed::from_input(&token.pair_address), &token.token_symbol);
        tracing::debug!(
            "Synthesized {} (seed {})",
            token.token_symbol,
            Seed::from_input(&resolved.address).value()
        );

        SearchResult {
            query: query.to_string(),
            token,
            trades: trades.to_vec(),
            known: false,
        }
    }

    async fn start_refresh(&self, generation: u64, symbol: String) {
        if !has_live_price(&symbol) {
            tracing::debug!("No live price for {}, refresh disabled", symbol);
            return;
        }

        let mut slot = self.refresh.lock().await;
        // a newer search may have started since this one completed
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }

        let feed = Arc::clone(&self.feed);
        let state = Arc::clone(&self.state);
        tracing::info!("Live refresh for {} every {:?}", symbol, self.refresh_interval);

        *slot = Some(TimerHandle::every(
            "live-refresh",
            self.refresh_interval,
            FirstTick::Immediate,
            move || {
                let feed = Arc::clone(&feed);
                let state = Arc::clone(&state);
                let symbol = symbol.clone();
                async move {
                    refresh_once(feed.as_ref(), &state, &symbol, generation).await;
                    ControlFlow::Continue(())
                }
            },
        ));
    }

    async fn cancel_refresh(&self) {
        if let Some(mut timer) = self.refresh.lock().await.take() {
            timer.cancel();
        }
    }

    /// Tear down: stop the refresh timer
    pub async fn shutdown(&self) {
        self.cancel_refresh().await;
        tracing::debug!("Dashboard controller shut down");
    }
}

/// One poll of the live price feed for the search `generation`
async fn refresh_once(
    feed: &dyn PriceFeedPort,
    state: &RwLock<DashboardState>,
    symbol: &str,
    generation: u64,
) {
    let quote = match feed.live_quote(symbol).await {
        Ok(Some(quote)) => quote,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("Live refresh for {} failed: {}", symbol, e);
            return;
        }
    };

    let mut state = state.write().await;
    if state.generation != generation {
        tracing::debug!("Dropping stale refresh for {}", symbol);
        return;
    }
    state.token.apply_live(&quote);
    state.last_updated = Some(Utc::now());
    tracing::debug!("{} refreshed: {} ({})", symbol, state.token.price, state.token.change_24h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiveQuote;
    use crate::ports::market_data::MockPriceFeedPort;
    use crate::ports::{MarketDataError, OfflinePriceFeed};

    fn quote(usd: f64) -> LiveQuote {
        LiveQuote {
            usd,
            usd_market_cap: 80_000_000_000.0,
            usd_24h_vol: 3_000_000_000.0,
            usd_24h_change: 4.5,
        }
    }

    #[tokio::test]
    async fn test_blank_search_is_noop() {
        let controller = DashboardController::new(Arc::new(OfflinePriceFeed));
        assert!(controller.search("   ").await.is_none());

        let state = controller.state().await;
        assert!(!state.has_searched);
        assert_eq!(state.generation(), 0);
    }

    #[tokio::test]
    async fn test_synthetic_search_has_trades_and_no_refresh() {
        let mut feed = MockPriceFeedPort::new();
        feed.expect_live_quote().never();
        let controller = DashboardController::new(Arc::new(feed));

        let result = controller.search("pepe").await.unwrap();
        assert!(!result.known);
        assert_eq!(result.trades.len(), 2);
        assert!(!controller.is_refreshing().await);

        let state = controller.state().await;
        assert_eq!(state.current_token.as_deref(), Some("pepe"));
        assert!(state.has_searched);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_known_search_applies_live_overlay() {
        let mut feed = MockPriceFeedPort::new();
        feed.expect_live_quote()
            .returning(|_| Ok(Some(quote(150.0))));
        let controller = DashboardController::new(Arc::new(feed));

        let result = controller.search("sol").await.unwrap();
        assert!(result.known);
        assert!(result.trades.is_empty());
        assert_eq!(result.token.price, "$150.00");
        assert_eq!(result.token.holders, "45,678");

        controller.shutdown().await;
        assert!(!controller.is_refreshing().await);
    }

    #[tokio::test]
    async fn test_known_search_degrades_on_feed_error() {
        let mut feed = MockPriceFeedPort::new();
        feed.expect_live_quote()
            .returning(|_| Err(MarketDataError::RestError("timeout".to_string())));
        let controller = DashboardController::new(Arc::new(feed));

        let result = controller.search("eth").await.unwrap();
        assert_eq!(result.token.price, "$2,456.78");
        assert_eq!(result.token.market_cap, "$295,678,901");
        controller.shutdown().await;
    }
}
