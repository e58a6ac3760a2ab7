//! `/web/search` response.

use serde::Deserialize;

use super::local::LocationResult;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebSearchApiResponse {
    pub web: Option<WebResults>,
    pub faq: Option<Faq>,
    pub discussions: Option<Discussions>,
    pub locations: Option<Locations>,
    pub summarizer: Option<SummarizerKey>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebResults {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub extra_snippets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub results: Vec<QaResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QaResult {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Discussions {
    #[serde(default)]
    pub results: Vec<DiscussionResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscussionResult {
    pub url: Option<String>,
    pub title: Option<String>,
    pub data: Option<ForumData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumData {
    pub forum_name: Option<String>,
    pub question: Option<String>,
    pub top_comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Locations {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}

/// Present when `summary=true` was requested and a summary can be produced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizerKey {
    pub key: String,
}
