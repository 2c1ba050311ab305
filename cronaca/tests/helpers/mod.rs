// Shared fixtures for the router and pipeline tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use cronaca::{Cronaca, CronacaConnector};
use cronaca_core::{ArticleSource, PricePoint, RawArticle};

/// Common query and symbol constants used across tests.
pub const FINANCE: &str = "finance";
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";

/// Provider timeout used by tests that exercise hanging connectors.
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(50);

/// Calendar date in January 2024.
pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Raw article with a title, publication timestamp and source name.
pub fn article(title: &str, published_at: &str, source: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: None,
        published_at: Some(published_at.to_string()),
        source: Some(ArticleSource {
            id: None,
            name: Some(source.to_string()),
        }),
        url: None,
    }
}

/// January 2024 closes from `(day, close)` pairs.
pub fn closes(rows: &[(u32, f64)]) -> Vec<PricePoint> {
    rows.iter().map(|&(d, c)| PricePoint::new(jan(d), c)).collect()
}

/// Orchestrator over `connectors`, in order, with the short test timeout.
pub fn cronaca_with(connectors: Vec<Arc<dyn CronacaConnector>>) -> Cronaca {
    connectors
        .into_iter()
        .fold(Cronaca::builder(), |b, c| b.with_connector(c))
        .provider_timeout(SHORT_TIMEOUT)
        .build()
        .unwrap()
}
