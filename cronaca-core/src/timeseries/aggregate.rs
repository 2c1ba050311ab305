use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{ArticleRecord, DailySentiment};

/// Bucket scored, dated articles by publication date and average each bucket.
///
/// Records without a score or without a date are skipped. Each remaining
/// record lands in exactly one bucket; a bucket's `mean_score` is the
/// unweighted mean of its scores. Empty input (or nothing usable) yields an
/// empty map.
#[must_use]
pub fn daily_sentiment(records: &[ArticleRecord]) -> BTreeMap<NaiveDate, DailySentiment> {
    let mut acc: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for (date, score) in records.iter().filter_map(ArticleRecord::dated_score) {
        let slot = acc.entry(date).or_insert((0.0, 0));
        slot.0 += score;
        slot.1 += 1;
    }

    acc.into_iter()
        .map(|(date, (sum, count))| {
            (
                date,
                DailySentiment {
                    date,
                    mean_score: sum / count as f64,
                    article_count: count,
                },
            )
        })
        .collect()
}
