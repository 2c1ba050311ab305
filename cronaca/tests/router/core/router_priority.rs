use cronaca_core::{Capability, NewsRequest};
use cronaca_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{FINANCE, article, cronaca_with};

#[tokio::test]
async fn registration_order_decides_the_winner() {
    let (first, c1) = DynamicMockConnector::new_with_controller("first");
    let (second, c2) = DynamicMockConnector::new_with_controller("second");
    c1.set_news_behavior(
        FINANCE,
        MockBehavior::Return(vec![article("from first", "2024-01-02", "A")]),
    )
    .await;
    c2.set_news_behavior(
        FINANCE,
        MockBehavior::Return(vec![article("from second", "2024-01-02", "B")]),
    )
    .await;

    let cronaca = cronaca_with(vec![first, second]);
    let got = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap();
    assert_eq!(got[0].title.as_deref(), Some("from first"));
    assert_eq!(c1.calls().await, vec![(Capability::News, FINANCE.to_string())]);
    assert!(c2.calls().await.is_empty());
}

#[tokio::test]
async fn an_empty_answer_still_wins() {
    let (first, c1) = DynamicMockConnector::new_with_controller("first");
    let (second, c2) = DynamicMockConnector::new_with_controller("second");
    c1.set_news_behavior(FINANCE, MockBehavior::Return(vec![])).await;
    c2.set_news_behavior(
        FINANCE,
        MockBehavior::Return(vec![article("late", "2024-01-02", "B")]),
    )
    .await;

    let cronaca = cronaca_with(vec![first, second]);
    let got = cronaca
        .news(&NewsRequest::new(FINANCE).unwrap())
        .await
        .unwrap();
    assert!(got.is_empty());
    assert!(c2.calls().await.is_empty());
}
