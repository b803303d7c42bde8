//! Financial Modeling Prep provider implementation.
//!
//! This provider fetches market context from the FMP stable API:
//! - Bulk index quotes via `quote/{comma-joined-tickers}`
//! - General market news via `stock_news?limit={n}`
//!
//! Both endpoints authenticate with an `apikey` query parameter and return a
//! JSON array of objects on success. A non-2xx status or a non-array body is
//! surfaced as an error; retry and backoff are left to the caller's policy
//! (the aggregator retries nothing).

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::errors::MarketContextError;
use crate::provider::{MarketContextProvider, RawIndexQuote, RawNewsArticle};

const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
const PROVIDER_ID: &str = "FMP";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Financial Modeling Prep client.
///
/// Holds an opaque API key; the only validation performed is a presence
/// check before a request is attempted.
///
/// # Example
///
/// ```ignore
/// let provider = FmpProvider::new("your-api-key");
/// let quotes = provider.index_quotes(&["^GSPC", "^VIX"]).await?;
/// ```
pub struct FmpProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl FmpProvider {
    /// Create a provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_key(Some(api_key.into()))
    }

    /// Create a provider from the `FMP_API_KEY` environment variable.
    ///
    /// A missing or empty variable yields an unconfigured provider; the
    /// aggregator then degrades to an absent snapshot without any network
    /// traffic.
    pub fn from_env() -> Self {
        Self::with_key(std::env::var("FMP_API_KEY").ok())
    }

    fn with_key(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<&str, MarketContextError> {
        self.api_key
            .as_deref()
            .ok_or(MarketContextError::MissingApiKey)
    }

    /// GET `endpoint` and parse the body as a JSON array of `T`.
    ///
    /// `endpoint` must not contain the API key; it is appended here so the
    /// logged URL stays free of credentials.
    async fn fetch_array<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        sep: char,
    ) -> Result<Vec<T>, MarketContextError> {
        let key = self.api_key()?;
        debug!("{} request: {}", PROVIDER_ID, endpoint);

        let url = format!("{}{}apikey={}", endpoint, sep, encode(key));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketContextError::ProviderRejection { status });
        }

        let body = response.text().await?;
        let records = serde_json::from_str::<Vec<T>>(&body)?;
        Ok(records)
    }
}

#[async_trait]
impl MarketContextProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn index_quotes(
        &self,
        symbols: &[&str],
    ) -> Result<Vec<RawIndexQuote>, MarketContextError> {
        let joined = symbols
            .iter()
            .map(|symbol| encode(symbol).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        let endpoint = format!("{}/quote/{}", self.base_url, joined);
        self.fetch_array(&endpoint, '?').await
    }

    async fn market_news(
        &self,
        limit: usize,
    ) -> Result<Vec<RawNewsArticle>, MarketContextError> {
        let endpoint = format!("{}/stock_news?limit={}", self.base_url, limit);
        self.fetch_array(&endpoint, '&').await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_configured_with_key() {
        let provider = FmpProvider::new("test_key");
        assert!(provider.is_configured());
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let provider = FmpProvider::new("");
        assert!(!provider.is_configured());
    }

    #[test]
    fn test_provider_id() {
        let provider = FmpProvider::new("test_key");
        assert_eq!(provider.id(), "FMP");
    }

    #[tokio::test]
    async fn test_unconfigured_fetch_fails_without_network() {
        let provider = FmpProvider::with_key(None);
        let result = provider.index_quotes(&["^GSPC"]).await;
        assert!(matches!(result, Err(MarketContextError::MissingApiKey)));
    }

    #[test]
    fn test_tickers_are_percent_encoded() {
        let joined = ["^GSPC", "^IXIC"]
            .iter()
            .map(|symbol| encode(symbol).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(joined, "%5EGSPC,%5EIXIC");
    }
}
