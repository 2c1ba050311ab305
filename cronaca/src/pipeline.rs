use cronaca_core::{
    AnalysisReport, CronacaError, Lookback, NewsReport, NewsRequest, PricePoint, PriceRequest,
    align, correlate, daily_sentiment, normalize_articles,
};

use crate::Cronaca;

impl Cronaca {
    /// Fetch and score the news for `query`.
    ///
    /// Every fetched article is kept, in source order, whether or not it could
    /// be dated. Unparseable publication dates are reported in `warnings`.
    ///
    /// # Errors
    /// `InvalidArg` for a blank query. `FetchUnavailable` when the news
    /// providers failed or returned no articles.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cronaca::pipeline::score_news", skip(self))
    )]
    pub async fn score_news(&self, query: &str) -> Result<NewsReport, CronacaError> {
        let req = NewsRequest::new(query)?.with_page_size(self.cfg.news_page_size);
        let raws = self
            .news(&req)
            .await
            .map_err(|e| unavailable(&format!("news for {query}"), e))?;
        if raws.is_empty() {
            return Err(CronacaError::fetch_unavailable(format!(
                "news for {query}: no articles"
            )));
        }

        let (articles, warnings) = normalize_articles(raws, self.scorer.as_ref());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            articles = articles.len(),
            warnings = warnings.len(),
            scorer = self.scorer.name(),
            "scored articles"
        );
        Ok(NewsReport {
            query: query.to_string(),
            articles,
            warnings,
        })
    }

    /// Fetch daily closes for `ticker` over the configured lookback.
    ///
    /// # Errors
    /// `InvalidArg` for a malformed ticker. `FetchUnavailable` when the price
    /// providers failed or returned no closes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cronaca::pipeline::fetch_prices", skip(self))
    )]
    pub async fn fetch_prices(&self, ticker: &str) -> Result<Vec<PricePoint>, CronacaError> {
        let req = PriceRequest::new(ticker, self.cfg.lookback)?;
        let prices = self
            .prices(&req)
            .await
            .map_err(|e| unavailable(&format!("prices for {}", req.symbol()), e))?;
        if prices.is_empty() {
            return Err(CronacaError::fetch_unavailable(format!(
                "prices for {}: no closes",
                req.symbol()
            )));
        }
        Ok(prices)
    }

    /// Fetch prices for `ticker` and correlate them with already scored news.
    ///
    /// # Errors
    /// Same as [`Cronaca::fetch_prices`]. A correlation that cannot be
    /// computed is not an error; see [`AnalysisReport::correlation`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca::pipeline::analyze",
            skip(self, news),
            fields(query = %news.query),
        )
    )]
    pub async fn analyze(
        &self,
        news: NewsReport,
        ticker: &str,
    ) -> Result<AnalysisReport, CronacaError> {
        let prices = self.fetch_prices(ticker).await?;
        let report = build_report(news, ticker.trim().to_ascii_uppercase(), self.cfg.lookback, prices);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            days = report.daily.len(),
            closes = report.prices.len(),
            aligned = report.aligned.len(),
            computed = report.correlation.is_computed(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Score news for `query`, then analyze it against `ticker`.
    ///
    /// # Errors
    /// See [`Cronaca::score_news`] and [`Cronaca::analyze`].
    pub async fn run(&self, query: &str, ticker: &str) -> Result<AnalysisReport, CronacaError> {
        let news = self.score_news(query).await?;
        self.analyze(news, ticker).await
    }
}

/// `FetchUnavailable` for `what`, naming the provider failures behind it.
///
/// Per-provider causes are flattened; benign ones (not found, unsupported)
/// are left out of the message unless nothing else went wrong.
fn unavailable(what: &str, e: CronacaError) -> CronacaError {
    let causes = e.flatten();
    #[cfg(feature = "tracing")]
    for cause in &causes {
        if cause.is_actionable() {
            tracing::warn!(what, error = %cause, "provider failure");
        } else {
            tracing::debug!(what, error = %cause, "provider miss");
        }
    }
    let actionable: Vec<String> = causes
        .iter()
        .filter(|c| c.is_actionable())
        .map(ToString::to_string)
        .collect();
    let shown = if actionable.is_empty() {
        causes.iter().map(ToString::to_string).collect()
    } else {
        actionable
    };
    CronacaError::fetch_unavailable(format!("{what}: {}", shown.join("; ")))
}

/// Aggregate, align and correlate scored news against a price series.
///
/// Pure and infallible: empty inputs produce an empty overlap and a
/// not-computable correlation.
#[must_use]
pub fn build_report(
    news: NewsReport,
    ticker: String,
    lookback: Lookback,
    prices: Vec<PricePoint>,
) -> AnalysisReport {
    let daily = daily_sentiment(&news.articles);
    let aligned = align(&daily, &prices);
    let correlation = correlate(&aligned);
    AnalysisReport {
        query: news.query,
        ticker,
        lookback,
        articles: news.articles,
        prices,
        daily,
        aligned,
        correlation,
        warnings: news.warnings,
    }
}
