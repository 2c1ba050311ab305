use cronaca_core::{Capability, CronacaError, NewsRequest, RawArticle};

use crate::Cronaca;

impl Cronaca {
    /// Fetch raw articles for a query from the first news provider that answers.
    ///
    /// Providers are tried in registration order, each bounded by the
    /// configured timeout. An empty list from a provider is a valid answer
    /// and is returned as-is.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides news, otherwise the collapsed
    /// provider errors (`NotFound`, `AllProvidersTimedOut`, `AllProvidersFailed`).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca::router::news",
            skip(self, req),
            fields(query = %req.query()),
        )
    )]
    pub async fn news(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError> {
        self.fetch_single_priority_with_fallback(Capability::News, req.query(), |c| {
            c.as_news_provider()?;
            let req = req.clone();
            Some(async move {
                match c.as_news_provider() {
                    Some(p) => p.news(&req).await,
                    None => Err(CronacaError::unsupported(Capability::News.as_str())),
                }
            })
        })
        .await
    }
}
