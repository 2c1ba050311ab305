use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cronaca_core::connector::{CronacaConnector, NewsProvider, PriceProvider};
use cronaca_core::{
    Capability, CronacaError, NewsRequest, PricePoint, PriceRequest, RawArticle,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CronacaError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    news_rules: HashMap<String, MockBehavior<Vec<RawArticle>>>,
    price_rules: HashMap<String, MockBehavior<Vec<PricePoint>>>,
    calls: Vec<(Capability, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `news` calls for a specific query.
    pub async fn set_news_behavior(
        &self,
        query: impl Into<String>,
        behavior: MockBehavior<Vec<RawArticle>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(query.into(), behavior);
    }

    /// Set the behavior for `daily_closes` calls for a specific (normalized) symbol.
    pub async fn set_price_behavior(
        &self,
        symbol: impl Into<String>,
        behavior: MockBehavior<Vec<PricePoint>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.price_rules.insert(symbol.into(), behavior);
    }

    /// Return a copy of the call log: capability and query/symbol, in call order.
    pub async fn calls(&self) -> Vec<(Capability, String)> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.news_rules.clear();
        guard.price_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    news: bool,
    prices: bool,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a dynamic mock advertising both capabilities, and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CronacaConnector>, DynamicMockController) {
        Self::new_with_capabilities(name, &[Capability::News, Capability::Prices])
    }

    /// Create a dynamic mock advertising only `capabilities`, and its controller.
    #[must_use]
    pub fn new_with_capabilities(
        name: &'static str,
        capabilities: &[Capability],
    ) -> (Arc<dyn CronacaConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            news: capabilities.contains(&Capability::News),
            prices: capabilities.contains(&Capability::Prices),
            state,
        });
        (me as Arc<dyn CronacaConnector>, controller)
    }

    async fn resolve<T: Clone>(
        &self,
        capability: Capability,
        key: &str,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, CronacaError> {
        // Snapshot the behavior without holding the lock across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push((capability, key.to_string()));
            pick(&*guard)
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(CronacaError::unsupported(capability.as_str())),
        }
    }
}

impl CronacaConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.news.then_some(self as &dyn NewsProvider)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        self.prices.then_some(self as &dyn PriceProvider)
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, req: &NewsRequest) -> Result<Vec<RawArticle>, CronacaError> {
        let query = req.query();
        self.resolve(Capability::News, query, |s| s.news_rules.get(query).cloned())
            .await
    }
}

#[async_trait]
impl PriceProvider for DynamicMockConnector {
    async fn daily_closes(&self, req: &PriceRequest) -> Result<Vec<PricePoint>, CronacaError> {
        let symbol = req.symbol();
        self.resolve(Capability::Prices, symbol, |s| {
            s.price_rules.get(symbol).cloned()
        })
        .await
    }
}
