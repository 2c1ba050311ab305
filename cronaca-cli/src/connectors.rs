use std::sync::Arc;

use cronaca_core::{CronacaConnector, CronacaError};
use cronaca_mock::MockConnector;
use cronaca_newsapi::NewsApiConnector;
use cronaca_newsapi::adapter::RealAdapter;
use cronaca_yfinance::YfConnector;

use crate::args::Args;

/// Connectors for this run, in routing order.
///
/// `--mock` serves everything from fixtures; otherwise news comes from NewsAPI
/// and prices from Yahoo Finance.
pub fn select(args: &Args) -> Result<Vec<Arc<dyn CronacaConnector>>, CronacaError> {
    if args.mock {
        tracing::info!("using the mock connector");
        let mock: Arc<dyn CronacaConnector> = Arc::new(MockConnector::new());
        return Ok(vec![mock]);
    }

    let key = args.api_key.as_deref().ok_or_else(|| {
        CronacaError::InvalidArg(
            "missing NewsAPI key; pass --api-key or set NEWSAPI_API_KEY (or use --mock)".into(),
        )
    })?;
    let mut news = RealAdapter::new(key)?;
    if let Some(lang) = &args.language {
        news = news.language(lang);
    }

    let news: Arc<dyn CronacaConnector> = Arc::new(NewsApiConnector::from_adapter(news));
    let prices: Arc<dyn CronacaConnector> = Arc::new(YfConnector::try_new_default()?);
    Ok(vec![news, prices])
}
