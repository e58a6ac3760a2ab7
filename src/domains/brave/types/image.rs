//! `/images/search` response.

use serde::Deserialize;

use super::Thumbnail;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSearchApiResponse {
    #[serde(default)]
    pub results: Vec<ImageResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub page_fetched: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub properties: Option<ImageProperties>,
    /// One of `low`, `medium`, `high`.
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageProperties {
    /// Full-size image URL.
    pub url: Option<String>,
    pub placeholder: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
