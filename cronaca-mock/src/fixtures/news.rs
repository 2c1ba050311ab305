use cronaca_core::{ArticleSource, RawArticle};

type Row = (
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
);

// (title, description, publishedAt, source name)
const FINANCE: &[Row] = &[
    (
        Some("Stocks rally as strong earnings beat forecasts"),
        Some("Broad gains lifted the major indexes to a record close."),
        Some("2024-01-03T14:05:00Z"),
        Some("Reuters"),
    ),
    (
        Some("Bond yields drop on recession fears"),
        Some("Investors worry about slowing growth."),
        Some("2024-01-03T18:40:00Z"),
        Some("Bloomberg"),
    ),
    (
        Some("Tech shares surge after upbeat guidance"),
        None,
        Some("2024-01-04T09:12:00Z"),
        Some("CNBC"),
    ),
    (
        Some("Regulators open fraud probe into lender"),
        Some("The scandal deepens as losses mount."),
        Some("2024-01-05T16:30:00-05:00"),
        Some("Financial Times"),
    ),
    (
        Some("Central bank holds rates steady"),
        Some(""),
        Some("2024-01-08T13:00:00Z"),
        Some("Associated Press"),
    ),
    (
        Some("Retail sales rebound, easing concerns"),
        Some("Consumers proved more robust than expected."),
        Some("2024-01-09T12:30:00Z"),
        Some("MarketWatch"),
    ),
    (
        Some("Oil prices tumble as supply worries fade"),
        Some("Crude posted its worst week in months."),
        Some("2024-01-10T20:15:00Z"),
        None,
    ),
    (
        Some("Analysts upgrade outlook for chipmakers"),
        Some("Demand is expected to improve sharply."),
        Some("2024-01-11 08:00:00"),
        Some("Barron's"),
    ),
    (
        Some("Markets not worried by inflation print"),
        None,
        Some("sometime on Thursday"),
        Some("Blog"),
    ),
    (
        None,
        Some("Wire copy without a headline."),
        None,
        None,
    ),
];

/// Fixture articles for a query, or `None` when the query has no fixture.
pub fn by_query(query: &str) -> Option<Vec<RawArticle>> {
    match query.trim().to_ascii_lowercase().as_str() {
        "finance" | "markets" | "stocks" => Some(FINANCE.iter().map(build).collect()),
        _ => None,
    }
}

fn build(row: &Row) -> RawArticle {
    let (title, description, published_at, source) = *row;
    RawArticle {
        title: title.map(str::to_string),
        description: description.map(str::to_string),
        published_at: published_at.map(str::to_string),
        source: source.map(|name| ArticleSource {
            id: None,
            name: Some(name.to_string()),
        }),
        url: None,
    }
}
