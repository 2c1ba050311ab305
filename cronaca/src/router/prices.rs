use cronaca_core::{Capability, CronacaError, PricePoint, PriceRequest};

use crate::Cronaca;

impl Cronaca {
    /// Fetch daily closes for a ticker from the first price provider that answers.
    ///
    /// Routing follows [`Cronaca::news`]. The returned series is whatever the
    /// provider produced; sorting and deduplication happen at alignment time.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides prices, otherwise the collapsed
    /// provider errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cronaca::router::prices",
            skip(self, req),
            fields(symbol = %req.symbol(), lookback = %req.lookback()),
        )
    )]
    pub async fn prices(&self, req: &PriceRequest) -> Result<Vec<PricePoint>, CronacaError> {
        self.fetch_single_priority_with_fallback(Capability::Prices, req.symbol(), |c| {
            c.as_price_provider()?;
            let req = req.clone();
            Some(async move {
                match c.as_price_provider() {
                    Some(p) => p.daily_closes(&req).await,
                    None => Err(CronacaError::unsupported(Capability::Prices.as_str())),
                }
            })
        })
        .await
    }
}
