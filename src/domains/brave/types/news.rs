//! `/news/search` response.

use serde::Deserialize;

use super::Thumbnail;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsSearchApiResponse {
    #[serde(default)]
    pub results: Vec<NewsResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsResult {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human readable age, e.g. "2 hours ago".
    pub age: Option<String>,
    pub page_age: Option<String>,
    pub page_fetched: Option<String>,
    pub breaking: Option<bool>,
    pub thumbnail: Option<Thumbnail>,
    pub extra_snippets: Option<Vec<String>>,
}
