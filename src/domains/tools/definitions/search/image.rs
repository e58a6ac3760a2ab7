//! Brave image search tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{
    default_country, default_search_lang, default_true, json_blocks, validate_query, validate_range,
};
use crate::domains::brave::types::{ImageResult, ImageSearchApiResponse};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

const MAX_COUNT: u32 = 200;

fn default_count() -> u32 {
    50
}

/// Image search only supports two filter levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSafeSearch {
    Off,
    #[default]
    Strict,
}

/// Parameters for the image search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImageSearchParams {
    /// Search query (max 400 characters, 50 words).
    #[serde(rename(serialize = "q"))]
    pub query: String,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_search_lang")]
    pub search_lang: String,

    /// Number of results to return (1-200).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Adult content filter: off or strict.
    #[serde(default)]
    pub safesearch: ImageSafeSearch,

    #[serde(default = "default_true")]
    pub spellcheck: bool,
}

impl ImageSearchParams {
    pub fn validate(&self) -> Result<(), ToolError> {
        validate_query(&self.query)?;
        validate_range("count", self.count, 1, MAX_COUNT)
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ImagePropertiesView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// An image as returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_fetched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    pub properties: ImagePropertiesView,
}

impl From<&ImageResult> for ImageView {
    fn from(result: &ImageResult) -> Self {
        let properties = result
            .properties
            .as_ref()
            .map(|p| ImagePropertiesView {
                url: p.url.clone(),
                width: p.width,
                height: p.height,
            })
            .unwrap_or_default();

        Self {
            title: result.title.clone(),
            url: result.url.clone(),
            page_fetched: result.page_fetched.clone(),
            confidence: result.confidence.clone(),
            properties,
        }
    }
}

/// Image search tool.
pub struct ImageSearchTool;

#[async_trait::async_trait]
impl SearchTool for ImageSearchTool {
    const NAME: &'static str = "brave_image_search";
    const TITLE: &'static str = "Brave Image Search";
    const DESCRIPTION: &'static str = "Searches for images using the Brave Search API. \
        Helpful when you need pictures of people, places or things, graphic design ideas or art inspiration. \
        Returns one JSON object per image with its title, source page URL, confidence and a properties \
        object holding the full-size image URL, width and height.\n\n\
        Example input: {\"query\": \"aurora borealis over iceland\", \"count\": 5}.\n\n\
        When relaying results in a markdown environment, include the images inline, \
        e.g. ![image.title](image.properties.url).";

    type Params = ImageSearchParams;

    #[instrument(skip_all, fields(query = %params.query))]
    async fn execute(
        api: &BraveApi,
        params: ImageSearchParams,
    ) -> Result<CallToolResult, ToolError> {
        params.validate()?;
        info!("Image search: {}", params.query);

        let response: ImageSearchApiResponse = api.issue_request(Endpoint::Images, &params).await?;
        let views: Vec<ImageView> = response.results.iter().map(ImageView::from).collect();

        Ok(CallToolResult::success(json_blocks(&views)?))
    }
}
