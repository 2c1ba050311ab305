//! Re-export of foundational types from `cronaca-types`.
// Consolidated so downstream crates can depend on `cronaca-core` only

pub use cronaca_types::{
    AlignedPoint, AnalysisReport, ArticleRecord, ArticleSource, Capability, ConnectorKey,
    CorrelationResult, CronacaConfig, CronacaError, DailySentiment, Lookback, NewsReport,
    NewsRequest, NotComputable, PricePoint, PriceRequest, RawArticle,
};
