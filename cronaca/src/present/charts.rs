use std::fmt::Write as _;

use cronaca_core::{AnalysisReport, ArticleRecord, CorrelationResult, PricePoint};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::text::{level_bar, shorten, signed_bar};

const PRICE_BAR_WIDTH: usize = 30;
const SCORE_HALF_WIDTH: usize = 10;

/// Shown instead of the overlay when no article has a usable date.
pub const NO_DATES: &str =
    "No published date information available in articles for causality analysis.";
/// Shown instead of the overlay when news and prices share no day.
pub const NO_OVERLAP: &str = "Not enough overlapping data between news and stock prices.";

const SCORE_NOTE: &str = "Note: Each bar represents one article's compound sentiment score. \
    Bars right of the axis indicate positive sentiment; bars left of the axis indicate \
    negative sentiment.";

const EXPLANATION: &str = "Explanation:\n  \
    * Daily Avg Sentiment bars: right of the axis is overall positive sentiment for the day, \
    left of the axis is overall negative sentiment.\n  \
    * Close: the stock's closing price, with a bar scaled between the lowest and highest \
    close shown.\n  \
    * A higher positive correlation indicates that days with more positive sentiment are \
    generally associated with higher stock prices, while a negative correlation suggests \
    the opposite trend.";

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Article")]
    label: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Tone")]
    tone: &'static str,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct OverlayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Avg Sentiment")]
    sentiment: String,
    #[tabled(rename = "")]
    sentiment_bar: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "")]
    close_bar: String,
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::psql()).to_string()
}

fn close_range<'a>(closes: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    closes.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
        (lo.min(*c), hi.max(*c))
    })
}

/// Closing price per trading day, ascending by date.
#[must_use]
pub fn price_view(prices: &[PricePoint]) -> String {
    let mut sorted = prices.to_vec();
    sorted.sort_by_key(|p| p.date);
    let (lo, hi) = close_range(sorted.iter().map(|p| &p.close));

    let rows: Vec<PriceRow> = sorted
        .iter()
        .map(|p| PriceRow {
            date: p.date.to_string(),
            close: format!("{:.2}", p.close),
            bar: level_bar(p.close, lo, hi, PRICE_BAR_WIDTH),
        })
        .collect();

    let mut out = String::from("Stock Price over Time\n");
    if rows.is_empty() {
        out.push_str("(no closes)\n");
    } else {
        let _ = writeln!(out, "{}", table(rows));
    }
    out
}

/// Up to `top_n` scored articles ranked by absolute score, descending.
///
/// Ties keep source order. Unscored articles are left out.
#[must_use]
pub fn top_articles(articles: &[ArticleRecord], top_n: usize) -> Vec<(&ArticleRecord, f64)> {
    let mut scored: Vec<(&ArticleRecord, f64)> = articles
        .iter()
        .filter_map(|a| a.score.map(|s| (a, s)))
        .collect();
    scored.sort_by(|(_, a), (_, b)| b.abs().total_cmp(&a.abs()));
    scored.truncate(top_n);
    scored
}

/// Ranked view of the most strongly scored articles, labels cut to
/// `label_width` characters.
#[must_use]
pub fn top_articles_view(articles: &[ArticleRecord], top_n: usize, label_width: usize) -> String {
    let top = top_articles(articles, top_n);
    let rows: Vec<ArticleRow> = top
        .iter()
        .enumerate()
        .map(|(i, (a, s))| ArticleRow {
            rank: i + 1,
            label: shorten(&a.title, label_width),
            score: format!("{s:.2}"),
            tone: if *s >= 0.0 { "positive" } else { "negative" },
            bar: signed_bar(*s, SCORE_HALF_WIDTH),
        })
        .collect();

    let mut out = format!("Sentiment of Top {} News Articles\n", rows.len());
    if rows.is_empty() {
        out.push_str("(no scored articles)\n");
    } else {
        let _ = writeln!(out, "{}", table(rows));
    }
    out.push_str(SCORE_NOTE);
    out.push('\n');
    out
}

/// Daily mean sentiment next to the close for every overlapping day.
///
/// Falls back to a single message when no article carried a usable date or
/// when no day is shared with the price series.
#[must_use]
pub fn overlay_view(report: &AnalysisReport) -> String {
    let mut out = String::from("Daily Average Sentiment vs Stock Price\n");
    if report.daily.is_empty() {
        out.push_str(NO_DATES);
        out.push('\n');
        return out;
    }
    if report.aligned.is_empty() {
        out.push_str(NO_OVERLAP);
        out.push('\n');
        return out;
    }

    let (lo, hi) = close_range(report.aligned.iter().map(|p| &p.close));
    let rows: Vec<OverlayRow> = report
        .aligned
        .iter()
        .map(|p| OverlayRow {
            date: p.date.to_string(),
            sentiment: format!("{:.2}", p.sentiment),
            sentiment_bar: signed_bar(p.sentiment, SCORE_HALF_WIDTH),
            close: format!("{:.2}", p.close),
            close_bar: level_bar(p.close, lo, hi, PRICE_BAR_WIDTH),
        })
        .collect();
    let _ = writeln!(out, "{}", table(rows));
    let _ = writeln!(out, "{}", correlation_line(&report.correlation));
    out.push('\n');
    out.push_str(EXPLANATION);
    out.push('\n');
    out
}

/// `Correlation: 0.xx`, or why no coefficient could be computed.
#[must_use]
pub fn correlation_line(result: &CorrelationResult) -> String {
    match result {
        CorrelationResult::Value(r) => format!("Correlation: {r:.2}"),
        CorrelationResult::NotComputable(reason) => {
            format!("Correlation: not computable ({reason})")
        }
    }
}
