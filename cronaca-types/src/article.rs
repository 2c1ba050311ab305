//! News payloads as received from a source, and their normalized form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publisher block of a raw article (`source.name` in NewsAPI payloads).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Provider-specific publisher id.
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable publisher name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One article exactly as a news source delivered it.
///
/// Every field is optional: sources routinely omit or null out any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Short summary or lede.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 publication timestamp, unparsed.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Publisher block.
    #[serde(default)]
    pub source: Option<ArticleSource>,
    /// Canonical link.
    #[serde(default)]
    pub url: Option<String>,
}

impl RawArticle {
    /// Publisher name, if the source block carries one.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// A scored, date-resolved article.
///
/// Built once from a [`RawArticle`] and never mutated afterwards. Records
/// without a score or without a date stay in listings but are skipped by the
/// daily aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Headline, empty when the source omitted it.
    pub title: String,
    /// Text handed to the sentiment scorer.
    pub raw_text: String,
    /// Compound sentiment in `[-1, 1]`, absent when the scorer gave no usable value.
    pub score: Option<f64>,
    /// Calendar date of publication, absent when missing or unparseable.
    pub published_date: Option<NaiveDate>,
    /// Original publication timestamp string, kept for listings.
    pub published_at: Option<String>,
    /// Publisher name, kept for listings.
    pub source: Option<String>,
}

impl ArticleRecord {
    /// `(date, score)` when the record can contribute to daily aggregation.
    #[must_use]
    pub fn dated_score(&self) -> Option<(NaiveDate, f64)> {
        Some((self.published_date?, self.score?))
    }
}
