use serde::{Deserialize, Serialize};

/// One normalized macro news headline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Article headline
    pub title: String,

    /// Source site name
    pub site: String,

    /// Publication timestamp, passed through as the provider's native string
    pub published_at: String,

    /// Link to the original article
    pub url: String,

    /// Article text clipped to its first 200 characters, with `...`
    /// appended whenever clipping occurred. Empty when the provider sent
    /// no text.
    pub summary: String,
}
