//! Pure normalization passes over raw provider records.
//!
//! Both passes share one convention: "absent" (`None`) is the only failure
//! signal, and an empty result is reported as absent too. The caller treats
//! "provider had nothing" and "nothing survived normalization" identically.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use log::warn;

use crate::models::{IndexQuote, MarketIndex, NewsArticle};
use crate::provider::{RawIndexQuote, RawNewsArticle};

/// Maximum number of articles carried into a snapshot.
pub(crate) const MAX_ARTICLES: usize = 5;

/// Article text is clipped to this many characters.
const SUMMARY_MAX_CHARS: usize = 200;

/// Appended to a summary whenever clipping occurred.
const TRUNCATION_MARKER: &str = "...";

/// Normalize raw bulk-quote records into a per-index mapping.
///
/// Records whose ticker is outside the tracked set are dropped silently;
/// records missing required fields or carrying an unusable timestamp are
/// dropped with a warning. Zero surviving records → `None`.
pub(crate) fn normalize_quotes(
    raw: Vec<RawIndexQuote>,
) -> Option<HashMap<MarketIndex, IndexQuote>> {
    let mut quotes = HashMap::new();

    for record in raw {
        let Some(index) = MarketIndex::from_ticker(&record.symbol) else {
            continue;
        };
        if let Some(quote) = to_index_quote(index, record) {
            quotes.insert(index, quote);
        }
    }

    if quotes.is_empty() {
        None
    } else {
        Some(quotes)
    }
}

/// Build one normalized quote, or `None` when the record is unusable.
fn to_index_quote(index: MarketIndex, record: RawIndexQuote) -> Option<IndexQuote> {
    let (Some(price), Some(change), Some(change_percent), Some(day_low), Some(day_high), Some(volume)) = (
        record.price,
        record.change,
        record.changes_percentage,
        record.day_low,
        record.day_high,
        record.volume,
    ) else {
        warn!(
            "quote record for {} is missing required fields, skipping",
            record.symbol
        );
        return None;
    };

    // Epoch seconds → UTC; a record with an unusable timestamp is a local
    // failure, never an abort of the whole pass.
    let as_of = match record
        .timestamp
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    {
        Some(ts) => ts,
        None => {
            warn!(
                "quote record for {} has an unusable timestamp, skipping",
                record.symbol
            );
            return None;
        }
    };

    Some(IndexQuote {
        index,
        symbol: record.symbol,
        price,
        change,
        change_percent,
        day_low,
        day_high,
        volume,
        as_of,
    })
}

/// Normalize raw articles into at most [`MAX_ARTICLES`] headlines, keeping
/// the provider's order. Empty input → `None`.
pub(crate) fn normalize_news(raw: Vec<RawNewsArticle>) -> Option<Vec<NewsArticle>> {
    if raw.is_empty() {
        return None;
    }

    let articles = raw
        .into_iter()
        .take(MAX_ARTICLES)
        .map(to_news_article)
        .collect();
    Some(articles)
}

fn to_news_article(raw: RawNewsArticle) -> NewsArticle {
    NewsArticle {
        title: raw.title,
        site: raw.site,
        published_at: raw.published_date,
        url: raw.url,
        summary: summarize(raw.text.as_deref()),
    }
}

/// Clip article text to its first [`SUMMARY_MAX_CHARS`] characters, marking
/// the clip. Counts characters, not bytes, so multi-byte text never splits.
fn summarize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    if text.chars().count() <= SUMMARY_MAX_CHARS {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{clipped}{TRUNCATION_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw_quote(symbol: &str) -> RawIndexQuote {
        RawIndexQuote {
            symbol: symbol.to_string(),
            price: Some(dec!(5000)),
            change: Some(dec!(10)),
            changes_percentage: Some(dec!(0.2)),
            day_low: Some(dec!(4950)),
            day_high: Some(dec!(5010)),
            volume: Some(1_000_000),
            timestamp: Some(1_700_000_000),
        }
    }

    fn raw_article(title: &str, text: Option<&str>) -> RawNewsArticle {
        RawNewsArticle {
            title: title.to_string(),
            site: "example.com".to_string(),
            published_date: "2024-01-15 09:30:00".to_string(),
            url: format!("https://example.com/{title}"),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_matched_tickers_only() {
        let raw = vec![raw_quote("^GSPC"), raw_quote("AAPL"), raw_quote("^VIX")];

        let quotes = normalize_quotes(raw).unwrap();
        assert_eq!(quotes.len(), 2);
        assert!(quotes.contains_key(&MarketIndex::Sp500));
        assert!(quotes.contains_key(&MarketIndex::Vix));
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert!(normalize_quotes(Vec::new()).is_none());
    }

    #[test]
    fn test_zero_matching_tickers_is_absent() {
        let raw = vec![raw_quote("AAPL"), raw_quote("MSFT")];
        assert!(normalize_quotes(raw).is_none());
    }

    #[test]
    fn test_quote_fields_pass_through() {
        let quotes = normalize_quotes(vec![raw_quote("^GSPC")]).unwrap();

        let quote = &quotes[&MarketIndex::Sp500];
        assert_eq!(quote.symbol, "^GSPC");
        assert_eq!(quote.price, dec!(5000));
        assert_eq!(quote.change, dec!(10));
        assert_eq!(quote.change_percent, dec!(0.2));
        assert_eq!(quote.day_low, dec!(4950));
        assert_eq!(quote.day_high, dec!(5010));
        assert_eq!(quote.volume, 1_000_000);
        assert_eq!(quote.as_of.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_record_missing_fields_is_skipped() {
        let mut incomplete = raw_quote("^GSPC");
        incomplete.price = None;

        let quotes = normalize_quotes(vec![incomplete, raw_quote("^VIX")]).unwrap();
        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key(&MarketIndex::Vix));
    }

    #[test]
    fn test_record_with_unusable_timestamp_is_skipped() {
        let mut bad_ts = raw_quote("^GSPC");
        bad_ts.timestamp = Some(i64::MAX);

        let quotes = normalize_quotes(vec![bad_ts, raw_quote("^DJI")]).unwrap();
        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains_key(&MarketIndex::DowJones));
    }

    #[test]
    fn test_all_records_unusable_is_absent() {
        let mut bad_ts = raw_quote("^GSPC");
        bad_ts.timestamp = None;
        assert!(normalize_quotes(vec![bad_ts]).is_none());
    }

    #[test]
    fn test_news_clipped_to_five_in_order() {
        let raw: Vec<RawNewsArticle> = (0..8)
            .map(|i| raw_article(&format!("article-{i}"), None))
            .collect();

        let articles = normalize_news(raw).unwrap();
        assert_eq!(articles.len(), 5);
        for (i, article) in articles.iter().enumerate() {
            assert_eq!(article.title, format!("article-{i}"));
        }
    }

    #[test]
    fn test_empty_news_is_absent() {
        assert!(normalize_news(Vec::new()).is_none());
    }

    #[test]
    fn test_article_fields_pass_through() {
        let articles = normalize_news(vec![raw_article("headline", Some("short body"))]).unwrap();

        let article = &articles[0];
        assert_eq!(article.title, "headline");
        assert_eq!(article.site, "example.com");
        assert_eq!(article.published_at, "2024-01-15 09:30:00");
        assert_eq!(article.url, "https://example.com/headline");
        assert_eq!(article.summary, "short body");
    }

    #[test]
    fn test_long_text_is_clipped_with_marker() {
        let text = "x".repeat(201);
        let articles = normalize_news(vec![raw_article("long", Some(&text))]).unwrap();

        let expected = format!("{}...", "x".repeat(200));
        assert_eq!(articles[0].summary, expected);
    }

    #[test]
    fn test_exactly_200_chars_is_not_clipped() {
        let text = "y".repeat(200);
        let articles = normalize_news(vec![raw_article("exact", Some(&text))]).unwrap();
        assert_eq!(articles[0].summary, text);
    }

    #[test]
    fn test_clipping_counts_characters_not_bytes() {
        let text = "é".repeat(250);
        let articles = normalize_news(vec![raw_article("multibyte", Some(&text))]).unwrap();

        let expected = format!("{}...", "é".repeat(200));
        assert_eq!(articles[0].summary, expected);
    }

    #[test]
    fn test_absent_text_yields_empty_summary() {
        let articles = normalize_news(vec![raw_article("no-body", None)]).unwrap();
        assert_eq!(articles[0].summary, "");
    }
}
