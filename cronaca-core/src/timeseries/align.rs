use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{AlignedPoint, DailySentiment, PricePoint};

/// Inner-join daily sentiment with closing prices on exact date equality.
///
/// Prices need not be sorted; the first price seen for a duplicated date wins.
/// Dates present in only one series are dropped and never imputed. The output
/// is strictly ascending by date.
#[must_use]
pub fn align(
    daily: &BTreeMap<NaiveDate, DailySentiment>,
    prices: &[PricePoint],
) -> Vec<AlignedPoint> {
    if daily.is_empty() || prices.is_empty() {
        return Vec::new();
    }

    // Stable sort keeps the first occurrence ahead of later duplicates.
    let mut sorted: Vec<PricePoint> = prices.to_vec();
    sorted.sort_by_key(|p| p.date);
    sorted.dedup_by_key(|p| p.date);

    let mut out = Vec::with_capacity(daily.len().min(sorted.len()));
    let mut news = daily.values().peekable();
    let mut px = sorted.iter().peekable();
    while let (Some(n), Some(p)) = (news.peek(), px.peek()) {
        match n.date.cmp(&p.date) {
            Ordering::Less => {
                news.next();
            }
            Ordering::Greater => {
                px.next();
            }
            Ordering::Equal => {
                out.push(AlignedPoint {
                    date: n.date,
                    sentiment: n.mean_score,
                    close: p.close,
                });
                news.next();
                px.next();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn day(date: NaiveDate, mean_score: f64) -> (NaiveDate, DailySentiment) {
        (
            date,
            DailySentiment {
                date,
                mean_score,
                article_count: 1,
            },
        )
    }

    #[test]
    fn only_shared_dates_survive() {
        let daily: BTreeMap<_, _> = [day(d(1), 0.1)].into_iter().collect();
        let prices = [PricePoint::new(d(1), 100.0), PricePoint::new(d(2), 102.0)];
        let out = align(&daily, &prices);
        assert_eq!(
            out,
            vec![AlignedPoint {
                date: d(1),
                sentiment: 0.1,
                close: 100.0
            }]
        );
    }

    #[test]
    fn unsorted_prices_and_duplicates() {
        let daily: BTreeMap<_, _> = [day(d(1), 0.1), day(d(3), -0.2), day(d(5), 0.4)]
            .into_iter()
            .collect();
        let prices = [
            PricePoint::new(d(5), 105.0),
            PricePoint::new(d(3), 103.0),
            PricePoint::new(d(3), 999.0),
            PricePoint::new(d(4), 104.0),
        ];
        let out = align(&daily, &prices);
        let dates: Vec<_> = out.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(3), d(5)]);
        assert_eq!(out[0].close, 103.0);
    }

    #[test]
    fn empty_inputs_align_to_nothing() {
        let daily: BTreeMap<_, _> = [day(d(1), 0.1)].into_iter().collect();
        assert!(align(&daily, &[]).is_empty());
        assert!(align(&BTreeMap::new(), &[PricePoint::new(d(1), 1.0)]).is_empty());
    }
}
