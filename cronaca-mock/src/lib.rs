//! cronaca-mock
//!
//! Deterministic connectors for tests and offline runs.
//!
//! - [`MockConnector`] serves static fixtures for news and prices.
//! - [`DynamicMockConnector`] defers every call to a [`DynamicMockController`].
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use cronaca_core::connector::{CronacaConnector, NewsProvider, PriceProvider};
use cronaca_core::{CronacaError, NewsRequest, PricePoint, PriceRequest, RawArticle};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// Queries `finance`, `markets` and `stocks` return a fixed batch of articles
/// from January 2024 (some with missing or unparseable dates); other queries
/// return nothing. Symbols `AAPL` and `MSFT` have closes up to 2024-01-12,
/// `EMPTY` has none, anything else is not found. The query or symbol `FAIL`
/// fails and `TIMEOUT` answers after a short delay.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(key: &str, capability: &'static str) -> Result<(), CronacaError> {
        match key {
            "FAIL" => Err(CronacaError::connector(
                "cronaca-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Short enough not to slow tests; the orchestrator may time out depending on config.
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn anchor() -> Option<NaiveDate> {
    let (y, m, d) = fixtures::prices::ANCHOR;
    NaiveDate::from_ymd_opt(y, m, d)
}

impl CronacaConnector for MockConnector {
    fn name(&self) -> &'static str {
        "cronaca-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError> {
        Self::maybe_fail_or_timeout(req.query(), "news").await?;
        let mut articles = fixtures::news::by_query(req.query()).unwrap_or_default();
        if let Some(n) = req.page_size() {
            articles.truncate(usize::from(n));
        }
        Ok(articles)
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    async fn daily_closes(&self, req: &PriceRequest) -> Result<Vec<PricePoint>, CronacaError> {
        Self::maybe_fail_or_timeout(req.symbol(), "prices").await?;
        let all = fixtures::prices::by_symbol(req.symbol())
            .ok_or_else(|| CronacaError::not_found(format!("prices for {}", req.symbol())))?;
        // The latest `lookback` sessions up to the anchor, as a live fetch made on that day.
        let end = anchor();
        let mut closes: Vec<PricePoint> = all
            .into_iter()
            .filter(|p| end.is_none_or(|e| p.date <= e))
            .collect();
        req.lookback().keep_latest(&mut closes);
        Ok(closes)
    }
}
