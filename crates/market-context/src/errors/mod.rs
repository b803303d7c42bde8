//! Error types for market context fetching.
//!
//! Every variant here is recovered at the phase boundary inside the
//! aggregator and downgraded to that phase's absent sentinel; none of them
//! reach the caller.

use thiserror::Error;

/// Errors that can occur while fetching market context data.
#[derive(Error, Debug)]
pub enum MarketContextError {
    /// No API key was supplied. Checked before any network call is made.
    #[error("no API key configured for the market data provider")]
    MissingApiKey,

    /// A network-level failure (DNS, connection, timeout) from the transport.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider rejected the request: HTTP {status}")]
    ProviderRejection {
        /// The status code the provider returned
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON array of objects.
    #[error("malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
