//! Sentiment scoring seam and the bundled VADER scorer.

mod vader;

pub use vader::VaderScorer;

/// Maps text to a compound sentiment score in `[-1, 1]`.
///
/// Implementations must be pure: the same text always yields the same score.
/// `None` means the scorer could not produce a value for this text; such
/// articles are kept in listings but excluded from aggregation.
pub trait SentimentScorer: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Score `text`.
    fn score(&self, text: &str) -> Option<f64>;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Option<f64> + Send + Sync,
{
    fn name(&self) -> &'static str {
        "fn"
    }

    fn score(&self, text: &str) -> Option<f64> {
        self(text)
    }
}
