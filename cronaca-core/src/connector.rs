use async_trait::async_trait;

pub use cronaca_types::ConnectorKey;
use cronaca_types::{CronacaError, NewsRequest, PricePoint, PriceRequest, RawArticle};

/// Focused role trait for connectors that provide raw news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch raw articles matching the request's query.
    ///
    /// An empty vector is a valid answer; it is up to the caller to decide
    /// whether that ends the run.
    async fn news(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError>;
}

/// Focused role trait for connectors that provide daily closing prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch one `PricePoint` per trading day in the requested window,
    /// ascending by date. An empty vector is a valid answer.
    async fn daily_closes(&self, req: &PriceRequest) -> Result<Vec<PricePoint>, CronacaError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait CronacaConnector: Send + Sync {
    /// A stable identifier (e.g. "cronaca-newsapi").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for news articles.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// If implemented, returns a trait object for daily closes.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }
}
