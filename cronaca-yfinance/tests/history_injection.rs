#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use cronaca_core::{CronacaConnector, CronacaError, Lookback, PriceRequest};
use cronaca_yfinance::{YfConnector, adapter};
use paft::money::{Currency, IsoCurrency, Money};
use yfinance_rs as yf;

// Bundle the trait object into something that satisfies CloneArcAdapters.
struct Combo {
    h: Arc<dyn adapter::YfHistory>,
}
impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_history(&self) -> Arc<dyn adapter::YfHistory> {
        self.h.clone()
    }
}

fn usd(v: &str) -> Money {
    Money::from_canonical_str(v, Currency::Iso(IsoCurrency::USD)).unwrap()
}

fn candle(ts: i64, close: &str) -> yf::Candle {
    yf::Candle {
        ts: Utc.timestamp_opt(ts, 0).unwrap(),
        open: usd(close),
        high: usd(close),
        low: usd(close),
        close: usd(close),
        close_unadj: None,
        volume: None,
    }
}

#[tokio::test]
async fn daily_closes_use_injected_adapter() {
    let hist = <dyn adapter::YfHistory>::from_fn(|symbol, req| {
        assert_eq!(symbol, "AAPL");
        assert!(req.auto_adjust);
        assert!(!req.include_prepost);
        let (start, end) = req.period.expect("explicit window");
        assert_eq!(end - start, 27 * 86_400);

        // 2024-01-02 and 2024-01-03 at 14:30 UTC (09:30 New York).
        Ok(yf::HistoryResponse {
            candles: vec![candle(1_704_292_200, "184.25"), candle(1_704_205_800, "185.64")],
            actions: vec![],
            adjusted: true,
            meta: Some(yf::HistoryMeta {
                timezone: Some(chrono_tz::America::New_York),
                utc_offset_seconds: Some(-18_000),
            }),
        })
    });

    let connector = YfConnector::from_adapter(&Combo { h: hist });
    let req = PriceRequest::new("aapl", Lookback::DEFAULT).unwrap();
    let closes = connector
        .as_price_provider()
        .unwrap()
        .daily_closes(&req)
        .await
        .unwrap();

    assert_eq!(closes.len(), 2);
    assert_eq!(closes[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert!((closes[0].close - 185.64).abs() < 1e-9);
    assert_eq!(closes[1].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
}

#[tokio::test]
async fn empty_history_is_a_valid_answer() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Ok(yf::HistoryResponse {
            candles: vec![],
            actions: vec![],
            adjusted: true,
            meta: None,
        })
    });
    let connector = YfConnector::from_adapter(&Combo { h: hist });
    let req = PriceRequest::new("EMPTY", Lookback::days(3).unwrap()).unwrap();
    let closes = connector
        .as_price_provider()
        .unwrap()
        .daily_closes(&req)
        .await
        .unwrap();
    assert!(closes.is_empty());
}

#[tokio::test]
async fn not_found_messages_map_to_not_found() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Err(CronacaError::connector(
            "cronaca-yfinance",
            "No data found, symbol may be delisted",
        ))
    });
    let connector = YfConnector::from_adapter(&Combo { h: hist });
    let req = PriceRequest::new("ZZZZ", Lookback::DEFAULT).unwrap();
    let err = connector
        .as_price_provider()
        .unwrap()
        .daily_closes(&req)
        .await
        .unwrap_err();
    assert!(matches!(err, CronacaError::NotFound { .. }));
}

#[tokio::test]
async fn other_errors_keep_connector_name() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Err(CronacaError::Other("some http error".to_string()))
    });
    let connector = YfConnector::from_adapter(&Combo { h: hist });
    let req = PriceRequest::new("AAPL", Lookback::DEFAULT).unwrap();
    let err = connector
        .as_price_provider()
        .unwrap()
        .daily_closes(&req)
        .await
        .unwrap_err();
    match err {
        CronacaError::Connector { connector, .. } => assert_eq!(connector, "cronaca-yfinance"),
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn daily_closes_keep_only_the_latest_sessions() {
    const JAN_2_OPEN: i64 = 1_704_205_800;
    const DAY: i64 = 86_400;
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        // Tue 2 .. Fri 5, then Mon 8 after the weekend.
        let candles = [0, 1, 2, 3, 6]
            .iter()
            .map(|d| candle(JAN_2_OPEN + d * DAY, "100"))
            .collect();
        Ok(yf::HistoryResponse {
            candles,
            actions: vec![],
            adjusted: true,
            meta: Some(yf::HistoryMeta {
                timezone: Some(chrono_tz::America::New_York),
                utc_offset_seconds: Some(-18_000),
            }),
        })
    });
    let connector = YfConnector::from_adapter(&Combo { h: hist });
    let req = PriceRequest::new("AAPL", Lookback::days(3).unwrap()).unwrap();
    let closes = connector
        .as_price_provider()
        .unwrap()
        .daily_closes(&req)
        .await
        .unwrap();

    let days: Vec<u32> = closes.iter().map(|p| p.date.day()).collect();
    assert_eq!(days, vec![4, 5, 8]);
}
