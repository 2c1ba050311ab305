//! `cronaca` binary: fetch news, score it, compare with daily closes, print the views.

mod args;
mod connectors;

use std::process::ExitCode;

use clap::Parser;
use cronaca::{Cronaca, CronacaError, present};
use tracing_subscriber::EnvFilter;

use crate::args::Args;

const NO_NEWS: &str = "No news articles fetched. Exiting.";
const NO_PRICES: &str = "No stock data available. Exiting.";

fn init_tracing() {
    // Logs go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: Args) -> Result<(), CronacaError> {
    let cfg = args.config();
    let cronaca = connectors::select(&args)?
        .into_iter()
        .fold(Cronaca::builder(), |b, c| b.with_connector(c))
        .config(cfg.clone())
        .build()?;

    let news = match cronaca.score_news(&args.query).await {
        Ok(news) => news,
        Err(e @ CronacaError::FetchUnavailable { .. }) => {
            tracing::warn!(error = %e, "stopping early");
            println!("{NO_NEWS}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    for w in &news.warnings {
        tracing::debug!(warning = %w, "degraded article");
    }
    println!("{}", present::metrics_summary(&news, cfg.lookback, cfg.top_n));

    let report = match cronaca.analyze(news, &args.ticker).await {
        Ok(report) => report,
        Err(e @ CronacaError::FetchUnavailable { .. }) => {
            tracing::warn!(error = %e, "stopping early");
            println!("{NO_PRICES}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("{}", present::render_views(&report, &cfg));
    print!("{}", present::article_listing(&report.articles));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
