//! Marketbrief Market Context Crate
//!
//! This crate supplies descriptive market context (index quotes and macro
//! news headlines) as a single timestamped snapshot. It is a normalizer and
//! aggregator, nothing more: outputs carry no trading recommendation or
//! timing signal.
//!
//! # Overview
//!
//! One aggregation routine does all the work:
//! - fetches bulk index quotes and general market news from the provider,
//! - normalizes each dataset into a fixed internal shape,
//! - degrades gracefully when a dataset (or a record within it) is
//!   unavailable or malformed,
//! - combines the results into one [`MarketSnapshot`], or fails closed and
//!   returns nothing.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | SnapshotService  |  (aggregator, fail-closed policy)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | quote normalizer |     |  news normalizer |
//! +------------------+     +------------------+
//!          |                        |
//!          v                        v
//!        +------------------------------+
//!        |    MarketContextProvider     |  (FMP over reqwest)
//!        +------------------------------+
//! ```
//!
//! Quotes are the mandatory signal: if the quote phase yields nothing, the
//! whole snapshot is absent. News is supplementary and best-effort.
//!
//! # Core Types
//!
//! - [`MarketIndex`] - Stable identifier for each tracked index
//! - [`IndexQuote`] - One normalized index quote
//! - [`NewsArticle`] - One normalized news headline
//! - [`MarketSnapshot`] - The combined, timestamped result
//! - [`SnapshotService`] - The aggregation routine
//! - [`FmpProvider`] - Financial Modeling Prep client
//!
//! The only caller-visible outcomes are a full snapshot, a snapshot with
//! quotes but no news, or `None`. Errors never escape the aggregator; every
//! degraded sub-step emits a warning through the `log` facade instead.

pub mod errors;
pub mod models;
pub mod provider;
pub mod snapshot;

// Re-export all public types from models
pub use models::{IndexQuote, MarketIndex, MarketSnapshot, NewsArticle};

// Re-export provider types
pub use provider::fmp::FmpProvider;
pub use provider::{MarketContextProvider, RawIndexQuote, RawNewsArticle};

// Re-export the aggregator
pub use snapshot::SnapshotService;

pub use errors::MarketContextError;
