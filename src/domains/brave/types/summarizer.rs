//! `/summarizer/search` response.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizerApiResponse {
    /// `complete` or `failed`.
    pub status: Option<String>,
    pub title: Option<String>,
    pub summary: Option<Vec<SummaryMessage>>,
    pub enrichments: Option<SummaryEnrichments>,
    pub followups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryMessage {
    /// `token`, `enum_item`, `inline_reference`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryEnrichments {
    pub context: Option<Vec<SummaryContext>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryContext {
    pub title: Option<String>,
    pub url: Option<String>,
}
