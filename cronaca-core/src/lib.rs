//! cronaca-core
//!
//! Core traits and the analysis pipeline shared across the cronaca workspace.
//!
//! - `types`: data structures re-exported from `cronaca-types`.
//! - `connector`: the `CronacaConnector` trait and the news/price provider traits.
//! - `sentiment`: the `SentimentScorer` seam and the bundled VADER scorer.
//! - `normalize`: raw article payloads to scored, date-resolved records.
//! - `timeseries`: per-day aggregation and date alignment.
//! - `stats`: the Pearson correlation over aligned points.
//!
//! Every pipeline step is a pure function over immutable input; none of them
//! can fail on malformed records.
#![warn(missing_docs)]

/// Connector capability traits and the primary `CronacaConnector` interface.
pub mod connector;
/// Article normalization.
pub mod normalize;
/// Sentiment scoring.
pub mod sentiment;
/// Correlation statistics.
pub mod stats;
/// Per-day aggregation and alignment.
pub mod timeseries;
pub mod types;

pub use connector::{CronacaConnector, NewsProvider, PriceProvider};
pub use normalize::{
    normalize_article, normalize_articles, parse_published_date, sanitize_score, scoring_text,
};
pub use sentiment::{SentimentScorer, VaderScorer};
pub use stats::{correlate, pearson};
pub use timeseries::aggregate::daily_sentiment;
pub use timeseries::align::align;
pub use types::*;
