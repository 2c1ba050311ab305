//! Cronaca-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod article;
mod capability;
mod config;
mod connector;
mod error;
mod reports;
mod requests;
mod series;

pub use article::{ArticleRecord, ArticleSource, RawArticle};
pub use capability::Capability;
pub use config::{CronacaConfig, Lookback};
pub use connector::ConnectorKey;
pub use error::CronacaError;
pub use reports::{AnalysisReport, NewsReport};
pub use requests::{NewsRequest, PriceRequest};
pub use series::{AlignedPoint, CorrelationResult, DailySentiment, NotComputable, PricePoint};
