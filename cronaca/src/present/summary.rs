use std::fmt::Write as _;

use cronaca_core::{ArticleRecord, Lookback, NewsReport};

/// Metrics block printed once the news has been scored.
///
/// Shows the examined period, the number of fetched articles, the mean score
/// over scored articles (two decimals, `n/a` when nothing was scored), the
/// sentiment guide and a reading recommendation.
#[must_use]
pub fn metrics_summary(news: &NewsReport, lookback: Lookback, top_n: usize) -> String {
    let avg = news
        .mean_sentiment()
        .map_or_else(|| "n/a".to_string(), |m| format!("{m:.2}"));
    let mut out = String::new();
    out.push_str("=== Metrics ===\n");
    let _ = writeln!(out, "Time Period Examined: {lookback}");
    let _ = writeln!(out, "Number of Articles Analyzed: {}", news.article_count());
    let _ = writeln!(out, "Average Sentiment (Compound): {avg}");
    out.push_str("Sentiment Guide: -1 = Very Negative, 0 = Neutral, 1 = Very Positive\n");
    let _ = writeln!(
        out,
        "\nRecommendation: Review the top {top_n} news articles in the sentiment view to \
         understand which news pieces may be influencing overall market sentiment. The \
         overlay view below shows how daily sentiment trends relate to the stock's closing \
         price, providing insights for fundamental analysis."
    );
    out
}

/// Numbered listing of every fetched article, dated or not.
#[must_use]
pub fn article_listing(articles: &[ArticleRecord]) -> String {
    let mut out = String::from("Articles List:\n");
    for (idx, a) in articles.iter().enumerate() {
        let title = if a.title.is_empty() {
            "No Title Provided"
        } else {
            a.title.as_str()
        };
        let _ = writeln!(
            out,
            "{}. {} - Source: {} - Date: {}",
            idx + 1,
            title,
            a.source.as_deref().unwrap_or("Unknown Source"),
            a.published_at.as_deref().unwrap_or("No Date Provided"),
        );
    }
    out
}
