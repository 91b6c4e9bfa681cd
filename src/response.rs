use serde::{Deserialize, Serialize};

/// A single article as returned by the API.
///
/// `title` and `description` default to the empty string when the API
/// omits them; `url_to_image` stays `None`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article headline.
    #[serde(default)]
    pub title: String,
    /// Link to the full article.
    pub url: String,
    /// Teaser text.
    #[serde(default)]
    pub description: String,
    /// Preview image, if the source provides one.
    #[serde(default)]
    pub url_to_image: Option<String>,
}

/// The article list of a successful API response.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// Matching articles, in API order. May be empty.
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl NewsResponse {
    /// True when the query matched nothing. An empty result is a normal
    /// outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
