use std::time::Duration;

use clap::Parser;
use clap::builder::BoolishValueParser;
use cronaca_core::{CronacaConfig, Lookback};

/// Correlate daily news sentiment with a stock's closing price.
#[derive(Parser, Debug)]
#[command(name = "cronaca", version, about, long_about = None)]
pub struct Args {
    /// News search term.
    #[arg(short, long, default_value = "finance")]
    pub query: String,

    /// Ticker symbol whose closes are compared with the news.
    #[arg(short, long, default_value = "AAPL")]
    pub ticker: String,

    /// Price window in trading days, e.g. `10d`.
    #[arg(short, long, default_value = "10d")]
    pub lookback: Lookback,

    /// Number of articles in the ranked view.
    #[arg(long = "top", default_value_t = 20)]
    pub top_n: usize,

    /// Maximum article label width in the ranked view.
    #[arg(long, default_value_t = 40)]
    pub label_width: usize,

    /// Per-provider request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Ask the news source for at most this many articles.
    #[arg(long)]
    pub page_size: Option<u8>,

    /// Restrict news to one language (ISO 639-1, e.g. `en`).
    #[arg(long)]
    pub language: Option<String>,

    /// NewsAPI key.
    #[arg(long, env = "NEWSAPI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Serve news and prices from built-in fixtures instead of the network.
    #[arg(long, env = "CRONACA_USE_MOCK", value_parser = BoolishValueParser::new())]
    pub mock: bool,
}

impl Args {
    /// Orchestrator configuration described by the flags.
    pub fn config(&self) -> CronacaConfig {
        CronacaConfig {
            lookback: self.lookback,
            top_n: self.top_n,
            label_width: self.label_width,
            provider_timeout: Duration::from_secs(self.timeout_secs),
            news_page_size: self.page_size,
        }
    }
}
