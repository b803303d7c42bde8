//! Snapshot aggregation.
//!
//! [`SnapshotService::fetch_market_snapshot`] is the single routine callers
//! use. It runs a linear state machine (credential check, quote phase, news
//! phase, assembly) and enforces the fail-closed policy: quotes are the
//! mandatory signal, news is supplementary. Every phase failure is consumed
//! at the phase boundary, logged, and downgraded to that phase's absent
//! sentinel; no error ever reaches the caller.

mod normalize;

use chrono::Utc;
use log::warn;

use crate::models::{MarketIndex, MarketSnapshot};
use crate::provider::MarketContextProvider;
use normalize::{normalize_news, normalize_quotes};

/// Number of articles requested from the provider. Normalization clips the
/// result further, to five.
const NEWS_FETCH_LIMIT: usize = 10;

/// The aggregation routine, generic over the transport seam.
///
/// Holds no state besides the provider; each call is independent and
/// reentrant, so a single service can be shared across tasks.
pub struct SnapshotService<P> {
    provider: P,
}

impl<P: MarketContextProvider> SnapshotService<P> {
    /// Create a service around the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Capture one market context snapshot.
    ///
    /// Returns `None` when no usable quote data could be obtained: missing
    /// credential, transport failure, provider rejection, malformed body, or
    /// a body in which no tracked index survived normalization. A present
    /// snapshot always carries quotes; news is attempted only after the
    /// quote phase succeeds and may still be absent.
    pub async fn fetch_market_snapshot(&self) -> Option<MarketSnapshot> {
        if !self.provider.is_configured() {
            warn!(
                "{}: no API key configured, skipping market context fetch",
                self.provider.id()
            );
            return None;
        }

        let tickers: Vec<&str> = MarketIndex::ALL.iter().map(|index| index.ticker()).collect();
        let quotes = match self.provider.index_quotes(&tickers).await {
            Ok(raw) => normalize_quotes(raw),
            Err(e) => {
                warn!("{}: index quote fetch failed: {}", self.provider.id(), e);
                None
            }
        };

        // Quotes gate the snapshot; the news call is not attempted without
        // them.
        let Some(quotes) = quotes else {
            warn!(
                "{}: no usable index quotes, dropping snapshot",
                self.provider.id()
            );
            return None;
        };

        let news = match self.provider.market_news(NEWS_FETCH_LIMIT).await {
            Ok(raw) => normalize_news(raw),
            Err(e) => {
                warn!(
                    "{}: market news fetch failed, continuing without news: {}",
                    self.provider.id(),
                    e
                );
                None
            }
        };

        Some(MarketSnapshot {
            quotes: Some(quotes),
            news,
            captured_at: Utc::now(),
        })
    }
}
