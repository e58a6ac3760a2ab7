//! `/videos/search` response.

use serde::Deserialize;

use super::Thumbnail;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoSearchApiResponse {
    #[serde(default)]
    pub results: Vec<VideoResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoResult {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub age: Option<String>,
    pub page_age: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub video: Option<VideoData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoData {
    /// Duration as `HH:MM:SS` or `MM:SS`.
    pub duration: Option<String>,
    pub views: Option<u64>,
    pub creator: Option<String>,
    pub publisher: Option<String>,
    pub requires_subscription: Option<bool>,
    pub tags: Option<Vec<String>>,
}
