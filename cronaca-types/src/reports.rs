//! Report envelopes produced by the orchestrator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::article::ArticleRecord;
use crate::config::Lookback;
use crate::error::CronacaError;
use crate::series::{AlignedPoint, CorrelationResult, DailySentiment, PricePoint};

/// Scored news for a query, before any price data is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    /// Query term the articles were fetched for.
    pub query: String,
    /// Every fetched article, normalized and scored, in source order.
    pub articles: Vec<ArticleRecord>,
    /// Non-fatal issues encountered while normalizing.
    pub warnings: Vec<CronacaError>,
}

impl NewsReport {
    /// Number of articles fetched.
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Mean score over scored articles; `None` when nothing was scored.
    #[must_use]
    pub fn mean_sentiment(&self) -> Option<f64> {
        let (sum, n) = self
            .articles
            .iter()
            .filter_map(|a| a.score)
            .fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
        (n > 0).then(|| sum / n as f64)
    }
}

/// Result of one full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Query term used for the news fetch.
    pub query: String,
    /// Ticker used for the price fetch.
    pub ticker: String,
    /// Price window.
    pub lookback: Lookback,
    /// Every fetched article, scored, unfiltered.
    pub articles: Vec<ArticleRecord>,
    /// Daily closes as returned by the price source.
    pub prices: Vec<PricePoint>,
    /// Mean sentiment per publication date.
    pub daily: BTreeMap<NaiveDate, DailySentiment>,
    /// Dates present in both `daily` and `prices`, ascending.
    pub aligned: Vec<AlignedPoint>,
    /// Pearson coefficient over `aligned`.
    pub correlation: CorrelationResult,
    /// Non-fatal issues encountered during the run.
    pub warnings: Vec<CronacaError>,
}
