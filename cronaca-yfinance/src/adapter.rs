use std::sync::Arc;

use async_trait::async_trait;

use cronaca_core::CronacaError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, CronacaError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns `Other` if either client cannot be built.
    pub fn try_new_default() -> Result<Self, CronacaError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| CronacaError::Other(format!("http client: {e}")))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns `Other` if the internal `YfClient` cannot be constructed.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, CronacaError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CronacaError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> CronacaError {
    match e {
        yf::YfError::NotFound { .. } => CronacaError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            CronacaError::connector("cronaca-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => CronacaError::connector(
            "cronaca-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            CronacaError::connector("cronaca-yfinance", format!("status {status}: {context}"))
        }
        other => CronacaError::connector("cronaca-yfinance", other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, CronacaError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("prices for {symbol}")))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, CronacaError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, CronacaError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, CronacaError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

/// Hands out shared adapter handles to `YfConnector::from_adapter`.
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory>;
}

impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
}
