use chrono::NaiveDate;
use cronaca_core::PricePoint;

/// Last day of every price fixture; lookback windows end here.
pub const ANCHOR: (i32, u32, u32) = (2024, 1, 12);

// Trading sessions only: 2023-12-30/31 and 2024-01-06/07 are weekends and
// 2024-01-01 is a holiday.
const AAPL: &[((i32, u32, u32), f64)] = &[
    ((2023, 12, 27), 193.15),
    ((2023, 12, 28), 193.58),
    ((2023, 12, 29), 192.53),
    ((2024, 1, 2), 185.64),
    ((2024, 1, 3), 184.25),
    ((2024, 1, 4), 181.91),
    ((2024, 1, 5), 181.18),
    ((2024, 1, 8), 185.56),
    ((2024, 1, 9), 185.14),
    ((2024, 1, 10), 186.19),
    ((2024, 1, 11), 185.59),
    ((2024, 1, 12), 185.92),
];

const MSFT: &[((i32, u32, u32), f64)] = &[
    ((2023, 12, 27), 374.07),
    ((2023, 12, 28), 375.28),
    ((2023, 12, 29), 376.04),
    ((2024, 1, 2), 370.87),
    ((2024, 1, 3), 370.60),
    ((2024, 1, 4), 367.94),
    ((2024, 1, 5), 367.75),
    ((2024, 1, 8), 374.69),
    ((2024, 1, 9), 375.79),
    ((2024, 1, 10), 382.77),
    ((2024, 1, 11), 384.63),
    ((2024, 1, 12), 388.47),
];

/// Fixture closes for a symbol, or `None` when the symbol is unknown.
pub fn by_symbol(symbol: &str) -> Option<Vec<PricePoint>> {
    let rows = match symbol {
        "AAPL" => AAPL,
        "MSFT" => MSFT,
        "EMPTY" => &[],
        _ => return None,
    };
    Some(
        rows.iter()
            .filter_map(|&((y, m, d), close)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| PricePoint::new(date, close))
            })
            .collect(),
    )
}
