use std::sync::Arc;

use cronaca_core::{CronacaConnector, CronacaError, Lookback, PriceRequest};
use cronaca_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{AAPL, MSFT, closes, cronaca_with, jan};

#[tokio::test]
async fn not_found_on_first_provider_falls_back() {
    let (first, first_ctl) = DynamicMockConnector::new_with_controller("first");
    first_ctl
        .set_price_behavior(
            AAPL,
            MockBehavior::Fail(CronacaError::not_found("prices for AAPL")),
        )
        .await;

    let mock: Arc<dyn CronacaConnector> = Arc::new(MockConnector::new());
    let cronaca = cronaca_with(vec![first, mock]);
    let got = cronaca
        .prices(&PriceRequest::new(AAPL, Lookback::DEFAULT).unwrap())
        .await
        .unwrap();
    assert_eq!(got.len(), 10);
    assert_eq!(got.last().map(|p| p.date), Some(jan(12)));
}

#[tokio::test]
async fn symbols_reach_providers_normalized() {
    let (only, ctl) = DynamicMockConnector::new_with_controller("only");
    ctl.set_price_behavior(MSFT, MockBehavior::Return(closes(&[(2, 1.0), (3, 2.0)])))
        .await;

    let cronaca = cronaca_with(vec![only]);
    let got = cronaca
        .prices(&PriceRequest::new(" msft ", Lookback::DEFAULT).unwrap())
        .await
        .unwrap();
    assert_eq!(got, closes(&[(2, 1.0), (3, 2.0)]));
}
