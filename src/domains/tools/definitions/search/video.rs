//! Brave video search tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{
    MAX_OFFSET, SafeSearch, default_country, default_search_lang, default_true, default_ui_lang,
    json_blocks, thumbnail_src, validate_freshness, validate_query, validate_range,
};
use crate::domains::brave::types::{VideoResult, VideoSearchApiResponse};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

const MAX_COUNT: u32 = 50;

fn default_count() -> u32 {
    20
}

/// Parameters for the video search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoSearchParams {
    /// Search query (max 400 characters, 50 words).
    #[serde(rename(serialize = "q"))]
    pub query: String,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_search_lang")]
    pub search_lang: String,

    #[serde(default = "default_ui_lang")]
    pub ui_lang: String,

    /// Number of results to return (1-50).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Zero-based page offset (0-9).
    #[serde(default)]
    pub offset: u32,

    #[serde(default = "default_true")]
    pub spellcheck: bool,

    /// Adult content filter: off, moderate or strict.
    #[serde(default)]
    pub safesearch: SafeSearch,

    /// Discovery window: pd, pw, pm, py or YYYY-MM-DDtoYYYY-MM-DD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<String>,
}

impl VideoSearchParams {
    pub fn validate(&self) -> Result<(), ToolError> {
        validate_query(&self.query)?;
        validate_range("count", self.count, 1, MAX_COUNT)?;
        validate_range("offset", self.offset, 0, MAX_OFFSET)?;
        validate_freshness(self.freshness.as_deref())
    }
}

/// A video as returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_subscription: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<&VideoResult> for VideoView {
    fn from(result: &VideoResult) -> Self {
        let video = result.video.as_ref();
        Self {
            url: result.url.clone(),
            title: result.title.clone(),
            description: result.description.clone(),
            age: result.age.clone(),
            duration: video.and_then(|v| v.duration.clone()),
            views: video.and_then(|v| v.views),
            creator: video.and_then(|v| v.creator.clone()),
            publisher: video.and_then(|v| v.publisher.clone()),
            requires_subscription: video.and_then(|v| v.requires_subscription),
            tags: video.and_then(|v| v.tags.clone()),
            thumbnail: thumbnail_src(&result.thumbnail),
        }
    }
}

/// Video search tool.
pub struct VideoSearchTool;

#[async_trait::async_trait]
impl SearchTool for VideoSearchTool {
    const NAME: &'static str = "brave_video_search";
    const TITLE: &'static str = "Brave Video Search";
    const DESCRIPTION: &'static str = "Searches for videos using the Brave Search API. \
        Use it for tutorials, talks, trailers or any query where a video is the expected answer.\n\n\
        Returns one JSON object per video with url, title, description, age, duration, views, creator, \
        publisher and thumbnail.\n\n\
        Example input: {\"query\": \"how to make sourdough bread\", \"count\": 10}.\n\n\
        When relaying results in a markdown environment, link each video by title and mention its \
        duration, e.g. \"[Sourdough for beginners](https://www.youtube.com/watch?v=abc123) (12:41)\".";

    type Params = VideoSearchParams;

    #[instrument(skip_all, fields(query = %params.query))]
    async fn execute(
        api: &BraveApi,
        params: VideoSearchParams,
    ) -> Result<CallToolResult, ToolError> {
        params.validate()?;
        info!("Video search: {}", params.query);

        let response: VideoSearchApiResponse = api.issue_request(Endpoint::Videos, &params).await?;
        let views: Vec<VideoView> = response.results.iter().map(VideoView::from).collect();

        Ok(CallToolResult::success(json_blocks(&views)?))
    }
}
