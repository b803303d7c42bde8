//! Market context provider abstraction and implementations.
//!
//! This module contains:
//! - The `MarketContextProvider` trait the aggregator fetches through
//! - The raw wire records both endpoints deserialize into
//! - The concrete Financial Modeling Prep implementation
//!
//! Providers return wire-shaped records untouched; all normalization happens
//! in the snapshot module. Tests implement `MarketContextProvider` directly
//! and never open a socket.

pub mod fmp;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketContextError;

/// Raw record from the provider's bulk-quote endpoint.
///
/// Every field except `symbol` is optional: a record missing required data
/// is skipped during normalization rather than failing the whole response.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndexQuote {
    /// Provider ticker the record is keyed by
    pub symbol: String,
    /// Last traded price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Absolute change since the previous close
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Percent change since the previous close
    #[serde(default)]
    pub changes_percentage: Option<Decimal>,
    /// Day low
    #[serde(default)]
    pub day_low: Option<Decimal>,
    /// Day high
    #[serde(default)]
    pub day_high: Option<Decimal>,
    /// Trading volume
    #[serde(default)]
    pub volume: Option<u64>,
    /// Observation time as Unix epoch seconds
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Raw record from the provider's news endpoint.
///
/// String fields default to empty so a sparse article still normalizes; only
/// the body text is modeled as truly optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNewsArticle {
    /// Article headline
    #[serde(default)]
    pub title: String,
    /// Source site name
    #[serde(default)]
    pub site: String,
    /// Publication timestamp, provider-native string
    #[serde(default)]
    pub published_date: String,
    /// Link to the original article
    #[serde(default)]
    pub url: String,
    /// Free-text article body
    #[serde(default)]
    pub text: Option<String>,
}

/// Transport seam the aggregator fetches market context through.
#[async_trait]
pub trait MarketContextProvider: Send + Sync {
    /// Short identifier used in log messages.
    fn id(&self) -> &'static str;

    /// Whether a credential is present. When this returns `false` the
    /// aggregator makes no network call at all.
    fn is_configured(&self) -> bool;

    /// Bulk quotes for the given provider tickers.
    async fn index_quotes(
        &self,
        symbols: &[&str],
    ) -> Result<Vec<RawIndexQuote>, MarketContextError>;

    /// Latest general market news, most relevant first, at most `limit`
    /// articles.
    async fn market_news(&self, limit: usize)
        -> Result<Vec<RawNewsArticle>, MarketContextError>;
}
