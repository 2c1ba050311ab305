use cronaca_core::{Capability, CronacaError, NewsRequest};
use cronaca_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{FINANCE, article, cronaca_with};

#[tokio::test]
async fn failing_provider_falls_back_to_next() {
    let (bad, bad_ctl) = DynamicMockConnector::new_with_controller("bad");
    let (good, good_ctl) = DynamicMockConnector::new_with_controller("good");
    bad_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Fail(CronacaError::connector("bad", "HTTP 500")),
        )
        .await;
    good_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Return(vec![
                article("Stocks rally", "2024-01-02T10:00:00Z", "Wire"),
                article("Bonds slump", "2024-01-03T10:00:00Z", "Wire"),
            ]),
        )
        .await;

    let cronaca = cronaca_with(vec![bad, good]);
    let got = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(bad_ctl.calls().await.len(), 1);
    assert_eq!(good_ctl.calls().await.len(), 1);
}

#[tokio::test]
async fn providers_without_news_are_skipped() {
    let (prices_only, prices_ctl) =
        DynamicMockConnector::new_with_capabilities("prices-only", &[Capability::Prices]);
    let (news, news_ctl) = DynamicMockConnector::new_with_controller("news");
    news_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Return(vec![article("Up", "2024-01-02", "Wire")]),
        )
        .await;

    let cronaca = cronaca_with(vec![prices_only, news]);
    let got = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap();
    assert_eq!(got.len(), 1);
    assert!(prices_ctl.calls().await.is_empty());
}

#[tokio::test]
async fn every_failure_is_reported_and_tagged() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    let (b, b_ctl) = DynamicMockConnector::new_with_controller("b");
    a_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Fail(CronacaError::Data("garbled".into())),
        )
        .await;
    b_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Fail(CronacaError::connector("b", "unauthorized")),
        )
        .await;

    let cronaca = cronaca_with(vec![a, b]);
    let err = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap_err();
    let CronacaError::AllProvidersFailed(errors) = err else {
        panic!("expected AllProvidersFailed, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        CronacaError::Connector { connector, msg } if connector == "a" && msg.contains("garbled")
    ));
    assert!(matches!(&errors[1], CronacaError::Connector { connector, .. } if connector == "b"));
}
