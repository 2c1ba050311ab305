//! cronaca-yfinance
//!
//! Public connector that implements `CronacaConnector` on top of the
//! `yfinance-rs` client library. Exposes daily closing prices.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

use adapter::{CloneArcAdapters, RealAdapter, YfHistory};
use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use cronaca_core::{
    CronacaError, PricePoint, PriceRequest,
    connector::{ConnectorKey, CronacaConnector, PriceProvider},
};
use paft::market::requests::history::Interval;
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

/// Public connector type. Production users will construct with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: Arc<dyn YfHistory>,
}

impl YfConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("cronaca-yfinance");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: CronacaError, what: &str) -> CronacaError {
        match e {
            CronacaError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    CronacaError::not_found(what.to_string())
                } else {
                    CronacaError::connector("cronaca-yfinance", msg)
                }
            }
            CronacaError::Other(msg) => CronacaError::connector("cronaca-yfinance", msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns an error if the HTTP or Yahoo client cannot be built.
    pub fn try_new_default() -> Result<Self, CronacaError> {
        Ok(Self::from_adapter(&RealAdapter::try_new_default()?))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yf::YfClient) -> Self {
        Self::from_adapter(&RealAdapter::new(client))
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, CronacaError> {
        Ok(Self::from_adapter(&RealAdapter::try_with_reqwest_client(
            http,
        )?))
    }

    /// Build from anything that can hand out adapter handles (tests inject closures here).
    pub fn from_adapter<A: CloneArcAdapters + ?Sized>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
        }
    }
}

/// Calendar date of a candle timestamp in the exchange's calendar.
///
/// Uses the named timezone when present, else the fixed UTC offset, else UTC.
#[must_use]
pub fn trading_date(ts: DateTime<Utc>, meta: Option<&yf::HistoryMeta>) -> NaiveDate {
    if let Some(m) = meta {
        if let Some(tz) = m.timezone {
            return date_in_tz(ts, tz);
        }
        if let Some(off) = m.utc_offset_seconds
            && let Ok(off) = i32::try_from(off)
            && let Some(fixed) = FixedOffset::east_opt(off)
        {
            return ts.with_timezone(&fixed).date_naive();
        }
    }
    ts.date_naive()
}

fn date_in_tz(ts: DateTime<Utc>, tz: chrono_tz::Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

/// Turn a history response into one `PricePoint` per trading date, ascending.
///
/// Candles whose close cannot be represented as a finite `f64` are skipped.
/// When two candles fall on the same date the earlier one wins.
#[must_use]
pub fn closes_from_history(resp: &yf::HistoryResponse) -> Vec<PricePoint> {
    let meta = resp.meta.as_ref();
    let mut candles: Vec<&yf::Candle> = resp.candles.iter().collect();
    candles.sort_by_key(|c| c.ts);

    let mut out: Vec<PricePoint> = Vec::with_capacity(candles.len());
    for c in candles {
        let Some(close) = c.close.amount().to_f64().filter(|v| v.is_finite()) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(ts = %c.ts, "skipping candle with unrepresentable close");
            continue;
        };
        let date = trading_date(c.ts, meta);
        if out.last().is_some_and(|p| p.date == date) {
            continue;
        }
        out.push(PricePoint::new(date, close));
    }
    out
}

/// Provider request for daily, auto-adjusted history ending at `now`.
///
/// The calendar window is wide enough to hold the lookback's sessions;
/// [`closes_from_history`] output is trimmed to them afterwards.
#[must_use]
pub fn history_request(
    req: &PriceRequest,
    now: DateTime<Utc>,
) -> yf::core::services::HistoryRequest {
    let start = now - Duration::days(i64::from(req.lookback().calendar_span_days()));
    yf::core::services::HistoryRequest {
        range: None,
        period: Some((start.timestamp(), now.timestamp())),
        interval: Interval::D1,
        include_prepost: false,
        include_actions: false,
        auto_adjust: true,
        keepna: false,
    }
}

#[async_trait]
impl PriceProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca_yfinance::daily_closes",
            skip(self, req),
            fields(symbol = %req.symbol(), lookback = %req.lookback()),
        )
    )]
    async fn daily_closes(&self, req: &PriceRequest) -> Result<Vec<PricePoint>, CronacaError> {
        let what = format!("prices for {}", req.symbol());
        let raw = self
            .history
            .fetch_full(req.symbol(), history_request(req, Utc::now()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        let mut closes = closes_from_history(&raw);
        req.lookback().keep_latest(&mut closes);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            candles = raw.candles.len(),
            days = closes.len(),
            "mapped candles to daily closes"
        );
        Ok(closes)
    }
}

impl CronacaConnector for YfConnector {
    fn name(&self) -> &'static str {
        "cronaca-yfinance"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}
