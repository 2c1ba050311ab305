use cronaca_core::{CronacaError, NewsRequest};
use cronaca_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{FINANCE, article, cronaca_with};

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out_and_next_answers() {
    let (slow, slow_ctl) = DynamicMockConnector::new_with_controller("slow");
    let (fast, fast_ctl) = DynamicMockConnector::new_with_controller("fast");
    slow_ctl.set_news_behavior(FINANCE, MockBehavior::Hang).await;
    fast_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Return(vec![article("ok", "2024-01-02", "Wire")]),
        )
        .await;

    let cronaca = cronaca_with(vec![slow, fast]);
    let got = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap();
    assert_eq!(got.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn all_hanging_providers_collapse_to_all_timed_out() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    let (b, b_ctl) = DynamicMockConnector::new_with_controller("b");
    a_ctl.set_news_behavior(FINANCE, MockBehavior::Hang).await;
    b_ctl.set_news_behavior(FINANCE, MockBehavior::Hang).await;

    let cronaca = cronaca_with(vec![a, b]);
    let err = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap_err();
    match err {
        CronacaError::AllProvidersTimedOut { capability } => assert_eq!(capability, "news"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn a_timeout_among_failures_is_not_all_timed_out() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    let (b, b_ctl) = DynamicMockConnector::new_with_controller("b");
    a_ctl.set_news_behavior(FINANCE, MockBehavior::Hang).await;
    b_ctl
        .set_news_behavior(
            FINANCE,
            MockBehavior::Fail(CronacaError::connector("b", "boom")),
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
    assert!(matches!(errors[0], CronacaError::ProviderTimeout { .. }));
}
