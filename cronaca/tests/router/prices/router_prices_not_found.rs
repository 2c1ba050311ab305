use std::sync::Arc;

use cronaca_core::{CronacaConnector, CronacaError, Lookback, PriceRequest};
use cronaca_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::cronaca_with;

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (dynamic, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_price_behavior(
        "ZZZZ",
        MockBehavior::Fail(CronacaError::not_found("ZZZZ")),
    )
    .await;

    let mock: Arc<dyn CronacaConnector> = Arc::new(MockConnector::new());
    let cronaca = cronaca_with(vec![dynamic, mock]);
    let err = cronaca
        .prices(&PriceRequest::new("zzzz", Lookback::DEFAULT).unwrap())
        .await
        .unwrap_err();
    match err {
        CronacaError::NotFound { what } => assert_eq!(what, "prices for ZZZZ"),
        other => panic!("unexpected: {other:?}"),
    }
}
