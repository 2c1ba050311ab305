//! Configuration types shared by the orchestrator, connectors and the CLI.

use core::fmt;
use core::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CronacaError;

/// Length of the price window, in trading sessions.
///
/// `10d` means the ten most recent sessions with a close, not ten calendar
/// days; weekends and exchange holidays do not count. Displayed as `"{n}d"` and parsed from either `"10d"` or `"10"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Lookback(u32);

impl Lookback {
    /// Window used when nothing else is configured.
    pub const DEFAULT: Self = Self(10);

    /// Build a lookback of `days` trading sessions.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `days` is zero.
    pub fn days(days: u32) -> Result<Self, CronacaError> {
        if days == 0 {
            return Err(CronacaError::InvalidArg(
                "lookback must cover at least one day".into(),
            ));
        }
        Ok(Self(days))
    }

    /// Number of trading sessions covered.
    #[must_use]
    pub const fn as_days(self) -> u32 {
        self.0
    }

    /// Calendar days to request from a provider so that `as_days()` sessions
    /// fit even across weekends and holiday weeks.
    #[must_use]
    pub const fn calendar_span_days(self) -> u32 {
        self.0.saturating_mul(2).saturating_add(7)
    }

    /// Drop all but the latest `as_days()` entries of a date-ascending series.
    pub fn keep_latest<T>(self, series: &mut Vec<T>) {
        let keep = usize::try_from(self.0).unwrap_or(usize::MAX);
        let excess = series.len().saturating_sub(keep);
        series.drain(..excess);
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

impl FromStr for Lookback {
    type Err = CronacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix('d')
            .or_else(|| trimmed.strip_suffix('D'))
            .unwrap_or(trimmed);
        let days: u32 = digits
            .parse()
            .map_err(|_| CronacaError::InvalidArg(format!("invalid lookback '{s}'")))?;
        Self::days(days)
    }
}

impl TryFrom<u32> for Lookback {
    type Error = CronacaError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::days(days)
    }
}

impl From<Lookback> for u32 {
    fn from(l: Lookback) -> Self {
        l.0
    }
}

/// Global configuration for the `Cronaca` orchestrator and its presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronacaConfig {
    /// Price window requested from the price source.
    pub lookback: Lookback,
    /// Number of articles shown in the ranked view.
    pub top_n: usize,
    /// Maximum width of an article label in the ranked view, placeholder included.
    pub label_width: usize,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional page size forwarded to news sources that support it.
    pub news_page_size: Option<u8>,
}

impl Default for CronacaConfig {
    fn default() -> Self {
        Self {
            lookback: Lookback::DEFAULT,
            top_n: 20,
            label_width: 40,
            provider_timeout: Duration::from_secs(30),
            news_page_size: None,
        }
    }
}

impl CronacaConfig {
    /// Check the presentation limits.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `top_n` is zero or `label_width` cannot hold
    /// at least one character plus the `...` placeholder.
    pub fn validate(&self) -> Result<(), CronacaError> {
        if self.top_n == 0 {
            return Err(CronacaError::InvalidArg("top_n must be positive".into()));
        }
        if self.label_width < 4 {
            return Err(CronacaError::InvalidArg(
                "label_width must be at least 4".into(),
            ));
        }
        Ok(())
    }
}
