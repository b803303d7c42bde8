use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::index::MarketIndex;

/// One normalized index quote.
///
/// Numeric fields pass through the provider's values unmodified; only the
/// observation timestamp is converted (epoch seconds → UTC).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Which tracked index this quote belongs to
    pub index: MarketIndex,

    /// The provider's native ticker (e.g. `^GSPC`)
    pub symbol: String,

    /// Last traded price (index points, or percent for yield indices)
    pub price: Decimal,

    /// Absolute change since the previous close
    pub change: Decimal,

    /// Percent change since the previous close
    pub change_percent: Decimal,

    /// Day low
    pub day_low: Decimal,

    /// Day high
    pub day_high: Decimal,

    /// Trading volume
    pub volume: u64,

    /// Observation timestamp as reported by the provider
    pub as_of: DateTime<Utc>,
}
