use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::sentiment::SentimentScorer;
use crate::types::{ArticleRecord, CronacaError, RawArticle};

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Text handed to the scorer for one article.
///
/// `title` and `description` joined by a single space when the description is
/// non-empty, otherwise the title alone. A missing title is an empty string.
#[must_use]
pub fn scoring_text(title: Option<&str>, description: Option<&str>) -> String {
    let title = title.unwrap_or_default();
    match description {
        Some(d) if !d.is_empty() => format!("{title} {d}"),
        _ => title.to_string(),
    }
}

/// Calendar date of an ISO-8601 publication timestamp.
///
/// The time component is truncated in the timestamp's own offset, so
/// `2024-01-01T23:30:00-05:00` is 2024-01-01. Any other value that starts with
/// a valid `YYYY-MM-DD` followed by `T` or a space yields that date. Returns
/// `None` for anything else.
#[must_use]
pub fn parse_published_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| leading_date(s))
}

// Date part of a timestamp whose time or offset uses a shape not listed above.
fn leading_date(s: &str) -> Option<NaiveDate> {
    let (date, rest) = s.split_at_checked(10)?;
    if !rest.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Scrub a scorer result: non-finite values become absent, the rest is
/// clamped to `[-1, 1]`.
#[must_use]
pub fn sanitize_score(score: Option<f64>) -> Option<f64> {
    score
        .filter(|s| s.is_finite())
        .map(|s| s.clamp(-1.0, 1.0))
}

/// Build one `ArticleRecord` from a raw payload. Never fails.
pub fn normalize_article<S>(raw: RawArticle, scorer: &S) -> ArticleRecord
where
    S: SentimentScorer + ?Sized,
{
    let raw_text = scoring_text(raw.title.as_deref(), raw.description.as_deref());
    let score = sanitize_score(scorer.score(&raw_text));
    let published_date = raw.published_at.as_deref().and_then(parse_published_date);
    let source = raw.source.and_then(|s| s.name);
    ArticleRecord {
        title: raw.title.unwrap_or_default(),
        raw_text,
        score,
        published_date,
        published_at: raw.published_at,
        source,
    }
}

/// Normalize a fetched batch, preserving order.
///
/// Returns the records plus one `MalformedRecord` warning per article whose
/// `publishedAt` was present but could not be parsed.
pub fn normalize_articles<S>(
    raws: Vec<RawArticle>,
    scorer: &S,
) -> (Vec<ArticleRecord>, Vec<CronacaError>)
where
    S: SentimentScorer + ?Sized,
{
    let mut warnings = Vec::new();
    let records = raws
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let record = normalize_article(raw, scorer);
            if record.published_date.is_none()
                && let Some(ts) = record.published_at.as_deref()
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, published_at = ts, "unparseable publication date");
                warnings.push(CronacaError::malformed(
                    index,
                    format!("unparseable publishedAt '{ts}'"),
                ));
            }
            record
        })
        .collect();
    (records, warnings)
}
