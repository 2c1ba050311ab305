#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use cronaca_core::{CronacaError, NewsRequest, RawArticle};

const CONNECTOR: &str = "cronaca-newsapi";

/// `everything` endpoint abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait NewsApiEverything: Send + Sync {
    /// Fetch the articles matching `req.query()`, in the order the API returned them.
    async fn everything(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError>;
}

/// Real adapter backed by a `reqwest::Client`.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    language: Option<String>,
    sort_by: Option<String>,
}

impl RealAdapter {
    /// Public NewsAPI host.
    pub const DEFAULT_BASE_URL: &'static str = "https://newsapi.org";

    /// Build against the public host with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key and `Other` if the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CronacaError> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, api_key)
    }

    /// Build against another host (a proxy, or a local mock server).
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or an unparseable base URL.
    pub fn with_base_url(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, CronacaError> {
        let http = reqwest::Client::builder()
            .no_proxy()
            .user_agent(concat!("cronaca/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CronacaError::Other(e.to_string()))?;
        Self::with_client(http, base_url, api_key)
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or an unparseable base URL.
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, CronacaError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CronacaError::InvalidArg("NewsAPI key must not be empty".into()));
        }
        let raw = base_url.as_ref().trim_end_matches('/');
        let base_url = Url::parse(&format!("{raw}/v2/everything"))
            .map_err(|e| CronacaError::InvalidArg(format!("invalid NewsAPI base url '{raw}': {e}")))?;
        Ok(Self {
            http,
            base_url,
            api_key,
            language: None,
            sort_by: None,
        })
    }

    /// Restrict results to one language (ISO 639-1, e.g. "en").
    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }

    /// Result ordering ("relevancy", "popularity" or "publishedAt").
    #[must_use]
    pub fn sort_by(mut self, order: impl Into<String>) -> Self {
        self.sort_by = Some(order.into());
        self
    }

    fn endpoint(&self, req: &NewsRequest) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("q", req.query());
            if let Some(n) = req.page_size() {
                q.append_pair("pageSize", &n.to_string());
            }
            if let Some(lang) = &self.language {
                q.append_pair("language", lang);
            }
            if let Some(order) = &self.sort_by {
                q.append_pair("sortBy", order);
            }
            q.append_pair("apiKey", &self.api_key);
        }
        url
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> CronacaError {
    if e.is_timeout() {
        CronacaError::connector(CONNECTOR, format!("timeout: {context}"))
    } else if e.is_connect() {
        CronacaError::connector(CONNECTOR, format!("connection failed: {context}"))
    } else if e.is_decode() || e.is_body() {
        CronacaError::Data(format!("unreadable response body: {context}"))
    } else {
        CronacaError::connector(CONNECTOR, format!("{context}: {e}"))
    }
}

fn map_status(status: reqwest::StatusCode, api_message: Option<String>, context: &str) -> CronacaError {
    let detail = api_message.map_or_else(String::new, |m| format!(" ({m})"));
    match status.as_u16() {
        401 => CronacaError::connector(CONNECTOR, format!("unauthorized: {context}{detail}")),
        404 => CronacaError::not_found(context.to_string()),
        429 => CronacaError::connector(CONNECTOR, format!("rate limit: {context}{detail}")),
        s if status.is_server_error() => {
            CronacaError::connector(CONNECTOR, format!("server error {s}: {context}{detail}"))
        }
        s => CronacaError::connector(CONNECTOR, format!("status {s}: {context}{detail}")),
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<serde_json::Value>>,
}

impl Envelope {
    fn error_message(&self) -> Option<String> {
        match (&self.code, &self.message) {
            (Some(c), Some(m)) => Some(format!("{c}: {m}")),
            (Some(c), None) => Some(c.clone()),
            (None, Some(m)) => Some(m.clone()),
            (None, None) => None,
        }
    }
}

/// Decode one article leniently: fields of the wrong type are dropped
/// instead of failing the whole payload.
fn decode_article(value: &serde_json::Value) -> RawArticle {
    if let Ok(a) = RawArticle::deserialize(value) {
        return a;
    }
    let text = |key: &str| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    };
    let source = value.get("source").map(|s| cronaca_core::ArticleSource {
        id: s.get("id").and_then(serde_json::Value::as_str).map(str::to_string),
        name: s
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
    });
    RawArticle {
        title: text("title"),
        description: text("description"),
        published_at: text("publishedAt"),
        source,
        url: text("url"),
    }
}

/// Parse a successful `everything` body into raw articles.
///
/// # Errors
/// Returns `Data` when the body is not a JSON object, and `Connector` when
/// the API reports `status: "error"`.
pub fn decode_everything(body: &str, context: &str) -> Result<Vec<RawArticle>, CronacaError> {
    let env: Envelope = serde_json::from_str(body)
        .map_err(|e| CronacaError::Data(format!("invalid NewsAPI payload for {context}: {e}")))?;
    if env.status.as_deref() == Some("error") {
        let msg = env.error_message().unwrap_or_else(|| "unknown error".into());
        return Err(CronacaError::connector(CONNECTOR, format!("{context}: {msg}")));
    }
    Ok(env
        .articles
        .unwrap_or_default()
        .iter()
        .map(decode_article)
        .collect())
}

#[async_trait]
impl NewsApiEverything for RealAdapter {
    async fn everything(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError> {
        let context = format!("news for {}", req.query());
        let resp = self
            .http
            .get(self.endpoint(req))
            .send()
            .await
            .map_err(|e| map_http_err(&e, &context))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| map_http_err(&e, &context))?;
        if !status.is_success() {
            let api_message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|e| e.error_message());
            return Err(map_status(status, api_message, &context));
        }
        decode_everything(&body, &context)
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn NewsApiEverything {
    /// Build a `NewsApiEverything` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn NewsApiEverything>
    where
        F: Send + Sync + 'static + Fn(NewsRequest) -> Result<Vec<RawArticle>, CronacaError>,
    {
        struct FnEverything<F>(F);
        #[async_trait]
        impl<F> NewsApiEverything for FnEverything<F>
        where
            F: Send + Sync + 'static + Fn(NewsRequest) -> Result<Vec<RawArticle>, CronacaError>,
        {
            async fn everything(
                &self,
                req: &NewsRequest,
            ) -> Result<Vec<RawArticle>, CronacaError> {
                (self.0)(req.clone())
            }
        }
        Arc::new(FnEverything(f))
    }
}
