use std::collections::BTreeMap;

use chrono::NaiveDate;
use cronaca_core::{ArticleRecord, daily_sentiment};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20).prop_map(|off| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(off))
}

fn arb_record() -> impl Strategy<Value = ArticleRecord> {
    (
        proptest::option::weighted(0.8, -1.0f64..=1.0),
        proptest::option::weighted(0.8, arb_date()),
    )
        .prop_map(|(score, published_date)| ArticleRecord {
            title: String::new(),
            raw_text: String::new(),
            score,
            published_date,
            published_at: None,
            source: None,
        })
}

proptest! {
    #[test]
    fn each_usable_record_lands_in_its_own_bucket(records in proptest::collection::vec(arb_record(), 0..100)) {
        let out = daily_sentiment(&records);

        let mut expected: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for r in &records {
            if let (Some(d), Some(s)) = (r.published_date, r.score) {
                expected.entry(d).or_default().push(s);
            }
        }

        prop_assert_eq!(out.len(), expected.len());
        let total: usize = out.values().map(|d| d.article_count).sum();
        prop_assert_eq!(total, expected.values().map(Vec::len).sum::<usize>());

        for (date, scores) in &expected {
            let bucket = &out[date];
            prop_assert_eq!(bucket.date, *date);
            prop_assert_eq!(bucket.article_count, scores.len());
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            prop_assert!((bucket.mean_score - mean).abs() < 1e-9);
            prop_assert!((-1.0..=1.0).contains(&bucket.mean_score));
        }
    }

    #[test]
    fn duplicating_a_batch_keeps_means(records in proptest::collection::vec(arb_record(), 1..60)) {
        let once = daily_sentiment(&records);
        let mut twice_input = records.clone();
        twice_input.extend(records.iter().cloned());
        let twice = daily_sentiment(&twice_input);

        prop_assert_eq!(once.len(), twice.len());
        for (date, d) in &once {
            let t = &twice[date];
            prop_assert!((d.mean_score - t.mean_score).abs() < 1e-9);
            prop_assert_eq!(t.article_count, 2 * d.article_count);
        }
    }
}
