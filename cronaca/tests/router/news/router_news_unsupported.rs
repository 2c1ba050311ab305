use cronaca_core::{Capability, CronacaError, NewsRequest};
use cronaca_mock::DynamicMockConnector;

use crate::helpers::{FINANCE, cronaca_with};

#[tokio::test]
async fn no_news_capable_connector_is_unsupported() {
    let (prices_only, _ctl) =
        DynamicMockConnector::new_with_capabilities("prices-only", &[Capability::Prices]);
    let cronaca = cronaca_with(vec![prices_only]);
    let err = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CronacaError::Unsupported { capability } if capability == "news"));
}
