use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentScorer;

/// VADER compound scorer.
///
/// Wraps `vader_sentiment::SentimentIntensityAnalyzer` and reports the
/// `compound` entry of its polarity scores, already normalized to `[-1, 1]`.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    /// Scorer backed by the stock VADER lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound score for `text`; blank text is neutral.
    #[must_use]
    pub fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn score(&self, text: &str) -> Option<f64> {
        Some(self.compound(text))
    }
}
