//! Brave news search tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{
    MAX_OFFSET, SafeSearch, default_country, default_search_lang, default_true, default_ui_lang,
    json_blocks, thumbnail_src, validate_freshness, validate_query, validate_range,
};
use crate::domains::brave::query::comma_separated;
use crate::domains::brave::types::{NewsResult, NewsSearchApiResponse};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

const MAX_COUNT: u32 = 50;

fn default_count() -> u32 {
    20
}

/// Parameters for the news search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewsSearchParams {
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

    /// Return up to five extra snippets per article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_snippets: Option<bool>,

    /// Goggle URLs or definitions used to re-rank results.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub goggles: Option<Vec<String>>,
}

impl NewsSearchParams {
    pub fn validate(&self) -> Result<(), ToolError> {
        validate_query(&self.query)?;
        validate_range("count", self.count, 1, MAX_COUNT)?;
        validate_range("offset", self.offset, 0, MAX_OFFSET)?;
        validate_freshness(self.freshness.as_deref())
    }
}

/// A news article as returned to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_age: Option<String>,
    pub breaking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_snippets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<&NewsResult> for NewsView {
    fn from(result: &NewsResult) -> Self {
        Self {
            url: result.url.clone(),
            title: result.title.clone(),
            age: result.age.clone(),
            page_age: result.page_age.clone(),
            breaking: result.breaking.unwrap_or(false),
            description: result.description.clone(),
            extra_snippets: result.extra_snippets.clone(),
            thumbnail: thumbnail_src(&result.thumbnail),
        }
    }
}

/// News search tool.
pub struct NewsSearchTool;

#[async_trait::async_trait]
impl SearchTool for NewsSearchTool {
    const NAME: &'static str = "brave_news_search";
    const TITLE: &'static str = "Brave News Search";
    const DESCRIPTION: &'static str = "Searches for news articles using the Brave Search API. \
        Use it for current events, breaking news and recent coverage of specific topics, events or entities.\n\n\
        Returns one JSON object per article with url, title, age, description and whether the story is breaking; \
        some results carry extra snippets from the article.\n\n\
        Example input: {\"query\": \"semiconductor export rules\", \"freshness\": \"pw\"}.\n\n\
        When relaying results in a markdown environment, always cite sources with hyperlinks, e.g.\n\
        - \"According to [Reuters](https://www.reuters.com/technology/), new export rules take effect next month.\"\n\
        - \"The [BBC](https://www.bbc.com/news/world-europe-65910000) reports a new renewable energy policy.\"";

    type Params = NewsSearchParams;

    #[instrument(skip_all, fields(query = %params.query))]
    async fn execute(
        api: &BraveApi,
        params: NewsSearchParams,
    ) -> Result<CallToolResult, ToolError> {
        params.validate()?;
        info!("News search: {}", params.query);

        let response: NewsSearchApiResponse = api.issue_request(Endpoint::News, &params).await?;
        let views: Vec<NewsView> = response.results.iter().map(NewsView::from).collect();

        Ok(CallToolResult::success(json_blocks(&views)?))
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{api_for, json_values};
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_breaking_defaults_to_false() {
        let result: NewsResult =
            serde_json::from_value(json!({"url": "https://news.example/a", "title": "A"})).unwrap();
        let value = serde_json::to_value(NewsView::from(&result)).unwrap();
        assert_eq!(value["breaking"], false);
        assert!(value.get("age").is_none());
    }

    #[test]
    fn test_breaking_true_preserved() {
        let result: NewsResult = serde_json::from_value(json!({
            "title": "Quake",
            "breaking": true,
            "thumbnail": {"src": "https://img.example/q.jpg"}
        }))
        .unwrap();
        let view = NewsView::from(&result);
        assert!(view.breaking);
        assert_eq!(view.thumbnail.as_deref(), Some("https://img.example/q.jpg"));
    }

    #[tokio::test]
    async fn test_execute() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/search"))
            .and(query_param("q", "elections"))
            .and(query_param("freshness", "pd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://news.example/1", "title": "Results", "age": "2 hours ago"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let params = serde_json::from_value(json!({"query": "elections", "freshness": "pd"})).unwrap();
        let result = NewsSearchTool::execute(&api, params).await.unwrap();

        let values = json_values(&result);
        assert_eq!(values[0]["age"], "2 hours ago");
        assert_eq!(values[0]["breaking"], false);
    }

    #[tokio::test]
    async fn test_execute_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let params = serde_json::from_value(json!({"query": "nothing"})).unwrap();
        let result = NewsSearchTool::execute(&api, params).await.unwrap();
        assert!(result.content.is_empty());
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_execute_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let params = serde_json::from_value(json!({"query": "busy"})).unwrap();
        let result = NewsSearchTool::execute(&api, params).await;
        assert!(matches!(result, Err(ToolError::Upstream(_))));
    }
}
