//! Terminal rendering of scored news, prices and their overlap.
//!
//! Every view renders to a `String`; printing is left to the caller.

mod charts;
mod summary;
mod text;

use cronaca_core::{AnalysisReport, CronacaConfig};

pub use charts::{
    NO_DATES, NO_OVERLAP, correlation_line, overlay_view, price_view, top_articles,
    top_articles_view,
};
pub use summary::{article_listing, metrics_summary};
pub use text::{PLACEHOLDER, level_bar, shorten, signed_bar};

/// The three analysis views in order: prices, ranked articles, overlay.
#[must_use]
pub fn render_views(report: &AnalysisReport, cfg: &CronacaConfig) -> String {
    [
        price_view(&report.prices),
        top_articles_view(&report.articles, cfg.top_n, cfg.label_width),
        overlay_view(report),
    ]
    .join("\n")
}
