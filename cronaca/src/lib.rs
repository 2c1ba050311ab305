//! Cronaca correlates daily news sentiment with a stock's closing price.
//!
//! Overview
//! - Routes news and price fetches to connectors that implement the
//!   `cronaca_core` contracts, in registration order.
//! - Bounds each provider call with a timeout and collapses per-provider
//!   failures into a single `CronacaError`.
//! - Scores every article, buckets scores by publication date, joins the
//!   daily means with the closes on shared dates and computes a Pearson
//!   coefficient over the overlap.
//! - Renders the metrics summary and the text views in [`present`].
//!
//! Key behaviors and trade-offs
//! - Fallback: the first provider that answers wins, an empty answer included.
//!   Failures and timeouts move on to the next capable provider; nothing is
//!   retried.
//! - Alignment is an inner join on calendar dates. Days with news but no close
//!   (weekends, holidays) and days with a close but no news are dropped, never
//!   imputed, so the overlap is usually shorter than the lookback.
//! - With fewer than two overlapping days, or a constant series, the
//!   correlation is reported as not computable rather than as zero.
//!
//! Examples
//! Building an orchestrator and running one analysis:
//! ```rust,ignore
//! use std::sync::Arc;
//! use cronaca::Cronaca;
//!
//! let cronaca = Cronaca::builder()
//!     .with_connector(Arc::new(cronaca_newsapi::NewsApiConnector::new(key)?))
//!     .with_connector(Arc::new(cronaca_yfinance::YfConnector::try_new_default()?))
//!     .lookback("10d".parse()?)
//!     .top_n(20)
//!     .build()?;
//!
//! let news = cronaca.score_news("finance").await?;
//! print!("{}", cronaca::present::metrics_summary(&news, cronaca.config().lookback, 20));
//! let report = cronaca.analyze(news, "AAPL").await?;
//! print!("{}", cronaca::present::render_views(&report, cronaca.config()));
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;
pub mod present;
mod router;

pub use crate::core::{Cronaca, CronacaBuilder};
pub use cronaca_core::{
    AlignedPoint, AnalysisReport, ArticleRecord, Capability, CorrelationResult, CronacaConfig,
    CronacaConnector, CronacaError, DailySentiment, Lookback, NewsReport, NotComputable,
    PricePoint, SentimentScorer, VaderScorer,
};
pub use pipeline::build_report;
pub use router::util::collapse_errors;
