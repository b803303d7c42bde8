//! Tracked market indices and their provider ticker registry.
//!
//! The set of indices is fixed at compile time; the reverse-lookup index
//! (ticker → identifier) is built once via `lazy_static`.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Stable identifier for a tracked market index, independent of the
/// provider's ticker symbol.
///
/// Unit variants serialize as strings, so the enum is usable as a JSON map
/// key in [`MarketSnapshot`](super::MarketSnapshot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketIndex {
    /// Broad-market US equity index (S&P 500).
    Sp500,
    /// Tech-heavy equity index (Nasdaq Composite).
    Nasdaq,
    /// Industrial equity index (Dow Jones Industrial Average).
    DowJones,
    /// CBOE volatility index.
    Vix,
    /// 10-year US Treasury yield.
    #[serde(rename = "treasury_yield_10y")]
    TreasuryYield10Y,
}

impl MarketIndex {
    /// All tracked indices, in display order.
    pub const ALL: [MarketIndex; 5] = [
        MarketIndex::Sp500,
        MarketIndex::Nasdaq,
        MarketIndex::DowJones,
        MarketIndex::Vix,
        MarketIndex::TreasuryYield10Y,
    ];

    /// The provider's native ticker for this index.
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Sp500 => "^GSPC",
            Self::Nasdaq => "^IXIC",
            Self::DowJones => "^DJI",
            Self::Vix => "^VIX",
            Self::TreasuryYield10Y => "^TNX",
        }
    }

    /// Reverse lookup: provider ticker → identifier.
    ///
    /// Returns `None` for tickers outside the tracked set; callers drop
    /// those records silently.
    pub fn from_ticker(ticker: &str) -> Option<Self> {
        TICKER_INDEX.get(ticker).copied()
    }
}

impl fmt::Display for MarketIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sp500 => write!(f, "S&P 500"),
            Self::Nasdaq => write!(f, "Nasdaq Composite"),
            Self::DowJones => write!(f, "Dow Jones Industrial Average"),
            Self::Vix => write!(f, "CBOE Volatility Index"),
            Self::TreasuryYield10Y => write!(f, "US 10-Year Treasury Yield"),
        }
    }
}

lazy_static! {
    /// Ticker → identifier reverse index, built once from [`MarketIndex::ALL`].
    static ref TICKER_INDEX: HashMap<&'static str, MarketIndex> = MarketIndex::ALL
        .iter()
        .map(|index| (index.ticker(), *index))
        .collect();
}
