//! Request envelopes handed to connectors.

use serde::{Deserialize, Serialize};

use crate::config::Lookback;
use crate::error::CronacaError;

/// Request for news articles matching a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    query: String,
    page_size: Option<u8>,
}

impl NewsRequest {
    /// Build a request for `query`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the query is blank.
    pub fn new(query: impl Into<String>) -> Result<Self, CronacaError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(CronacaError::InvalidArg(
                "news query must not be empty".into(),
            ));
        }
        Ok(Self {
            query,
            page_size: None,
        })
    }

    /// Ask the source for at most `n` articles, when it supports paging.
    #[must_use]
    pub const fn with_page_size(mut self, n: Option<u8>) -> Self {
        self.page_size = n;
        self
    }

    /// The query term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Requested page size, if any.
    #[must_use]
    pub const fn page_size(&self) -> Option<u8> {
        self.page_size
    }
}

/// Request for daily closes of one ticker over a lookback window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    symbol: String,
    lookback: Lookback,
}

impl PriceRequest {
    /// Build a request for `symbol` over `lookback`.
    ///
    /// The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is blank or contains whitespace.
    pub fn new(symbol: impl AsRef<str>, lookback: Lookback) -> Result<Self, CronacaError> {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(CronacaError::InvalidArg(format!(
                "invalid ticker symbol '{symbol}'"
            )));
        }
        Ok(Self {
            symbol: symbol.to_ascii_uppercase(),
            lookback,
        })
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Requested window.
    #[must_use]
    pub const fn lookback(&self) -> Lookback {
        self.lookback
    }
}
