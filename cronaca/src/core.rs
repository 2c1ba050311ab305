use std::sync::Arc;
use std::time::Duration;

use cronaca_core::{
    Capability, CronacaConfig, CronacaConnector, CronacaError, Lookback, SentimentScorer,
    VaderScorer,
};

/// Orchestrator that routes fetches across registered providers and runs the
/// sentiment/price analysis.
pub struct Cronaca {
    pub(crate) connectors: Vec<Arc<dyn CronacaConnector>>,
    pub(crate) cfg: CronacaConfig,
    pub(crate) scorer: Arc<dyn SentimentScorer>,
}

/// Builder for constructing a `Cronaca` orchestrator with custom configuration.
pub struct CronacaBuilder {
    connectors: Vec<Arc<dyn CronacaConnector>>,
    cfg: CronacaConfig,
    scorer: Option<Arc<dyn SentimentScorer>>,
}

impl Default for CronacaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CronacaBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// Defaults: 10 day lookback, top 20 articles, 40 character labels,
    /// 30 s provider timeout, the bundled VADER scorer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: CronacaConfig::default(),
            scorer: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order for each capability; the
    /// first one that answers wins. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CronacaConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CronacaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the price window.
    #[must_use]
    pub const fn lookback(mut self, lookback: Lookback) -> Self {
        self.cfg.lookback = lookback;
        self
    }

    /// Number of articles shown in the ranked view.
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.cfg.top_n = n;
        self
    }

    /// Maximum article label width in the ranked view.
    #[must_use]
    pub const fn label_width(mut self, width: usize) -> Self {
        self.cfg.label_width = width;
        self
    }

    /// Per-provider request timeout.
    ///
    /// A provider that does not answer within this budget counts as failed
    /// and the next capable provider is tried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Page size forwarded to news providers that support it.
    #[must_use]
    pub const fn news_page_size(mut self, n: Option<u8>) -> Self {
        self.cfg.news_page_size = n;
        self
    }

    /// Use a custom sentiment scorer instead of the bundled VADER scorer.
    #[must_use]
    pub fn scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no connector is registered or the
    /// configuration fails validation.
    pub fn build(self) -> Result<Cronaca, CronacaError> {
        if self.connectors.is_empty() {
            return Err(CronacaError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        self.cfg.validate()?;

        Ok(Cronaca {
            connectors: self.connectors,
            cfg: self.cfg,
            scorer: self
                .scorer
                .unwrap_or_else(|| Arc::new(VaderScorer::new()) as Arc<dyn SentimentScorer>),
        })
    }
}

pub fn tag_err(connector: &str, e: CronacaError) -> CronacaError {
    match e {
        e @ (CronacaError::NotFound { .. }
        | CronacaError::ProviderTimeout { .. }
        | CronacaError::Connector { .. }
        | CronacaError::AllProvidersTimedOut { .. }
        | CronacaError::AllProvidersFailed(_)) => e,
        other => CronacaError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Cronaca {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CronacaError>
    where
        Fut: core::future::Future<Output = Result<T, CronacaError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(CronacaError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Start building a new `Cronaca` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let news = Arc::new(cronaca_newsapi::NewsApiConnector::new("...")?);
    /// let prices = Arc::new(cronaca_yfinance::YfConnector::try_new_default()?);
    ///
    /// let cronaca = cronaca::Cronaca::builder()
    ///     .with_connector(news)
    ///     .with_connector(prices)
    ///     .lookback("10d".parse()?)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CronacaBuilder {
        CronacaBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CronacaConfig {
        &self.cfg
    }

    /// Name of the active sentiment scorer.
    #[must_use]
    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Try each registered connector in order until one answers.
    ///
    /// `call` returns `None` for connectors lacking the capability. Errors of
    /// the attempted connectors are collapsed with [`crate::collapse_errors`];
    /// `subject` names what was asked for (query or symbol) in `NotFound`.
    pub(crate) async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        capability: Capability,
        subject: &str,
        call: F,
    ) -> Result<T, CronacaError>
    where
        T: Send,
        F: Fn(Arc<dyn CronacaConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<T, CronacaError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<CronacaError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (CronacaError::NotFound { .. } | CronacaError::ProviderTimeout { .. })) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider miss; trying next");
                    errors.push(e);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(connector = c.name(), error = %e, "provider failed; trying next");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{capability} for {subject}")),
        ))
    }
}
