//! Daily series produced and consumed by the analysis pipeline.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean sentiment of all scored articles published on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// Calendar date of the bucket.
    pub date: NaiveDate,
    /// Unweighted arithmetic mean of the bucket's scores.
    pub mean_score: f64,
    /// Number of articles that contributed.
    pub article_count: usize,
}

/// Closing price for one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date in the exchange's calendar.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A date present in both the daily sentiment and the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Shared calendar date.
    pub date: NaiveDate,
    /// Daily mean sentiment on that date.
    pub sentiment: f64,
    /// Closing price on that date.
    pub close: f64,
}

/// Why a correlation coefficient could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum NotComputable {
    /// Fewer than two aligned points.
    InsufficientData {
        /// Number of aligned points that were available.
        points: usize,
    },
    /// One of the two series is constant.
    ZeroVariance,
}

impl fmt::Display for NotComputable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { points } => {
                write!(f, "insufficient data ({points} aligned day(s), need 2)")
            }
            Self::ZeroVariance => f.write_str("constant series (zero variance)"),
        }
    }
}

/// Outcome of correlating daily sentiment against closing prices.
///
/// A computed coefficient of `0.0` and "nothing computed" are different
/// values of this type and must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationResult {
    /// No coefficient could be computed.
    NotComputable(NotComputable),
    /// Pearson coefficient in `[-1, 1]`.
    Value(f64),
}

impl CorrelationResult {
    /// The coefficient, if one was computed.
    #[must_use]
    pub const fn coefficient(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::NotComputable(_) => None,
        }
    }

    /// True when a coefficient was computed.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}
