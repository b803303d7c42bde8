use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::index::MarketIndex;
use super::news::NewsArticle;
use super::quote::IndexQuote;

/// One capture of market context at a point in time.
///
/// Quotes and news are independently optional within a present snapshot; the
/// aggregator guarantees a snapshot is only produced when quotes are present,
/// but consumers should not rely on that beyond the documented contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Normalized quotes, keyed by tracked index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<HashMap<MarketIndex, IndexQuote>>,

    /// Up to five news headlines, in the provider's order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<NewsArticle>>,

    /// When this snapshot was assembled (independent of the sub-fetch
    /// observation timestamps)
    pub captured_at: DateTime<Utc>,
}
