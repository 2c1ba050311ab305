//! cronaca-newsapi
//!
//! Public connector that implements `CronacaConnector` on top of the NewsAPI
//! `v2/everything` endpoint. Exposes the news capability only.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;

use std::sync::Arc;

use adapter::{NewsApiEverything, RealAdapter};
use async_trait::async_trait;
use cronaca_core::{
    CronacaError, NewsRequest, RawArticle,
    connector::{ConnectorKey, CronacaConnector, NewsProvider},
};

#[cfg(feature = "test-adapters")]
type EverythingAdapter = Arc<dyn NewsApiEverything>;
#[cfg(not(feature = "test-adapters"))]
type EverythingAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with `NewsApiConnector::new(key)`.
pub struct NewsApiConnector {
    everything: EverythingAdapter,
}

impl NewsApiConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("cronaca-newsapi");

    /// Build against the public NewsAPI host.
    ///
    /// # Errors
    /// Returns an error for a blank key or if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CronacaError> {
        Ok(Self::from_adapter(RealAdapter::new(api_key)?))
    }

    /// Build against another host, e.g. a local mock server.
    ///
    /// # Errors
    /// Returns an error for a blank key or an unparseable base URL.
    pub fn with_base_url(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, CronacaError> {
        Ok(Self::from_adapter(RealAdapter::with_base_url(
            base_url, api_key,
        )?))
    }

    /// Build from a configured `RealAdapter` (custom client, language, ordering).
    #[must_use]
    pub fn from_adapter(adapter: RealAdapter) -> Self {
        Self {
            everything: Arc::new(adapter),
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_everything(everything: Arc<dyn NewsApiEverything>) -> Self {
        Self { everything }
    }
}

#[async_trait]
impl NewsProvider for NewsApiConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca_newsapi::news",
            skip(self, req),
            fields(query = %req.query()),
        )
    )]
    async fn news(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError> {
        let articles = self.everything.everything(req).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = articles.len(), "fetched articles");
        Ok(articles)
    }
}

impl CronacaConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        "cronaca-newsapi"
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
