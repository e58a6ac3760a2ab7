//! Brave web search tool.
//!
//! Searches the general web index. Besides ordinary results, the projection
//! carries FAQ entries and forum discussions when Brave returns them.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{
    MAX_OFFSET, SafeSearch, Units, default_country, default_search_lang, default_true,
    default_ui_lang, json_block, validate_freshness, validate_query, validate_range,
};
use crate::domains::brave::query::comma_separated;
use crate::domains::brave::types::{
    DiscussionResult, QaResult, SearchResult, WebSearchApiResponse,
};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

const MAX_COUNT: u32 = 20;

pub(super) fn default_count() -> u32 {
    10
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the web search tool.
///
/// Also the upstream query string: `query` is sent as `q`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query (max 400 characters, 50 words).
    #[serde(rename(serialize = "q"))]
    pub query: String,

    /// Two-letter country code the results come from.
    #[serde(default = "default_country")]
    pub country: String,

    /// Language of the results.
    #[serde(default = "default_search_lang")]
    pub search_lang: String,

    /// User interface language of the response, e.g. en-US.
    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,

    /// Number of results to return (1-20).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Zero-based page offset (0-9).
    #[serde(default)]
    pub offset: u32,

    /// Adult content filter: off, moderate or strict.
    #[serde(default)]
    pub safesearch: SafeSearch,

    /// Discovery window: pd, pw, pm, py or YYYY-MM-DDtoYYYY-MM-DD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<String>,

    /// Include highlighting markers in snippets.
    #[serde(default)]
    pub text_decorations: bool,

    /// Let Brave correct misspelled queries.
    #[serde(default = "default_true")]
    pub spellcheck: bool,

    /// Result types to include, e.g. ["web", "faq", "discussions"].
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub result_filter: Option<Vec<String>>,

    /// Goggle URLs or definitions used to re-rank results.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub goggles: Option<Vec<String>>,

    /// Measurement units: metric or imperial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,

    /// Return up to five extra snippets per result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_snippets: Option<bool>,

    /// Request a summarizer key for use with brave_summarizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<bool>,
}

impl WebSearchParams {
    pub fn validate(&self) -> Result<(), ToolError> {
        validate_query(&self.query)?;
        validate_range("count", self.count, 1, MAX_COUNT)?;
        validate_range("offset", self.offset, 0, MAX_OFFSET)?;
        validate_freshness(self.freshness.as_deref())
    }
}

// ============================================================================
// Projection
// ============================================================================

/// A web result as returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebResultView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_snippets: Option<Vec<String>>,
}

impl From<&SearchResult> for WebResultView {
    fn from(result: &SearchResult) -> Self {
        Self {
            url: result.url.clone(),
            title: result.title.clone(),
            description: result.description.clone(),
            extra_snippets: result.extra_snippets.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FaqView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&QaResult> for FaqView {
    fn from(qa: &QaResult) -> Self {
        Self {
            question: qa.question.clone(),
            answer: qa.answer.clone(),
            title: qa.title.clone(),
            url: qa.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscussionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_comment: Option<String>,
}

impl From<&DiscussionResult> for DiscussionView {
    fn from(discussion: &DiscussionResult) -> Self {
        let data = discussion.data.as_ref();
        Self {
            url: discussion.url.clone(),
            title: discussion.title.clone(),
            forum_name: data.and_then(|d| d.forum_name.clone()),
            question: data.and_then(|d| d.question.clone()),
            top_comment: data.and_then(|d| d.top_comment.clone()),
        }
    }
}

#[derive(Serialize)]
struct SummarizerKeyView<'a> {
    summarizer_key: &'a str,
}

/// Project web results, FAQ entries and discussions, in that order.
pub fn web_blocks(response: &WebSearchApiResponse) -> Result<Vec<Content>, ToolError> {
    let mut blocks = Vec::new();

    if let Some(web) = &response.web {
        for result in &web.results {
            blocks.push(json_block(&WebResultView::from(result))?);
        }
    }
    if let Some(faq) = &response.faq {
        for qa in &faq.results {
            blocks.push(json_block(&FaqView::from(qa))?);
        }
    }
    if let Some(discussions) = &response.discussions {
        for discussion in &discussions.results {
            blocks.push(json_block(&DiscussionView::from(discussion))?);
        }
    }

    Ok(blocks)
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Web search tool - general purpose search over the Brave web index.
pub struct WebSearchTool;

#[async_trait::async_trait]
impl SearchTool for WebSearchTool {
    const NAME: &'static str = "brave_web_search";
    const TITLE: &'static str = "Brave Web Search";
    const DESCRIPTION: &'static str = "Performs a web search using the Brave Search API. \
        Use it for general information gathering, recent events and finding web pages.\n\n\
        Returns one JSON object per web result (url, title, description, extra_snippets), \
        followed by FAQ entries and forum discussions when available. \
        Set \"summary\": true to also receive a summarizer_key for brave_summarizer.\n\n\
        Example input: {\"query\": \"rust borrow checker explained\", \"count\": 5}.\n\n\
        When relaying results in a markdown environment, cite the pages you use with hyperlinks, \
        e.g. \"The [Rust Book](https://doc.rust-lang.org/book/ch04-02-references-and-borrowing.html) \
        explains that references must always be valid.\"";

    type Params = WebSearchParams;

    #[instrument(skip_all, fields(query = %params.query))]
    async fn execute(api: &BraveApi, params: WebSearchParams) -> Result<CallToolResult, ToolError> {
        params.validate()?;
        info!("Web search: {}", params.query);

        let response: WebSearchApiResponse = api.issue_request(Endpoint::Web, &params).await?;
        let mut blocks = web_blocks(&response)?;

        if params.summary == Some(true) {
            if let Some(summarizer) = &response.summarizer {
                blocks.push(json_block(&SummarizerKeyView {
                    summarizer_key: &summarizer.key,
                })?);
            }
        }

        Ok(CallToolResult::success(blocks))
    }
}
