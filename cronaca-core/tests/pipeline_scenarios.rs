use std::collections::BTreeMap;

use chrono::NaiveDate;
use cronaca_core::{
    AlignedPoint, CorrelationResult, DailySentiment, NotComputable, PricePoint, RawArticle, align,
    correlate, daily_sentiment, normalize_articles,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn raw(title: &str, published_at: Option<&str>) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        published_at: published_at.map(str::to_string),
        ..RawArticle::default()
    }
}

// Scorer keyed on the headline, standing in for a real model.
fn headline_scorer(text: &str) -> Option<f64> {
    match text {
        "Good news" => Some(0.8),
        "Bad news" => Some(-0.6),
        _ => None,
    }
}

#[test]
fn mixed_day_averages_to_point_one() {
    let (records, warnings) = normalize_articles(
        vec![
            raw("Good news", Some("2024-01-01T09:00:00Z")),
            raw("Bad news", Some("2024-01-01T17:30:00Z")),
        ],
        &headline_scorer,
    );
    assert!(warnings.is_empty());
    let daily = daily_sentiment(&records);
    assert!((daily[&d(1)].mean_score - 0.10).abs() < 1e-12);
}

#[test]
fn single_overlap_is_not_computable() {
    let daily: BTreeMap<_, _> = [(
        d(1),
        DailySentiment {
            date: d(1),
            mean_score: 0.1,
            article_count: 1,
        },
    )]
    .into_iter()
    .collect();
    let prices = [PricePoint::new(d(1), 100.0), PricePoint::new(d(2), 102.0)];

    let aligned = align(&daily, &prices);
    assert_eq!(
        aligned,
        vec![AlignedPoint {
            date: d(1),
            sentiment: 0.1,
            close: 100.0
        }]
    );
    assert_eq!(
        correlate(&aligned),
        CorrelationResult::NotComputable(NotComputable::InsufficientData { points: 1 })
    );
}

#[test]
fn undated_articles_never_reach_the_overlay() {
    let (records, warnings) = normalize_articles(
        vec![
            raw("Good news", None),
            raw("Bad news", Some("sometime last week")),
        ],
        &headline_scorer,
    );
    assert_eq!(records.len(), 2);
    assert_eq!(warnings.len(), 1);
    let daily = daily_sentiment(&records);
    assert!(daily.is_empty());
    assert!(align(&daily, &[PricePoint::new(d(1), 1.0)]).is_empty());
}

#[test]
fn full_chain_over_several_days() {
    let (records, _) = normalize_articles(
        vec![
            raw("Good news", Some("2024-01-01")),
            raw("Bad news", Some("2024-01-02")),
            raw("Good news", Some("2024-01-03")),
            raw("Good news", Some("2024-01-06")),
        ],
        &headline_scorer,
    );
    let daily = daily_sentiment(&records);
    let prices = [
        PricePoint::new(d(3), 103.0),
        PricePoint::new(d(2), 99.0),
        PricePoint::new(d(1), 101.0),
        PricePoint::new(d(4), 104.0),
    ];
    let aligned = align(&daily, &prices);
    assert_eq!(aligned.len(), 3);
    let r = correlate(&aligned).coefficient().unwrap();
    assert!(r > 0.8 && r < 0.9);
}
