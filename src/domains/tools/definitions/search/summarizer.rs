//! Brave summarizer tool.
//!
//! Turns a summarizer key (obtained from `brave_web_search` with
//! `summary: true`) into an AI-generated summary. A single request is made;
//! a summary that is not yet complete is reported as a failure.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::common::json_block;
use crate::domains::brave::types::{SummarizerApiResponse, SummaryMessage};
use crate::domains::brave::{BraveApi, Endpoint};
use crate::domains::tools::{SearchTool, ToolError};

const STATUS_COMPLETE: &str = "complete";

/// Parameters for the summarizer tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SummarizerParams {
    /// Summarizer key returned by brave_web_search.
    pub key: String,

    /// Include extra information about entities in the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_info: Option<bool>,

    /// Add inline references to the sources in the summary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_references: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SourceView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceView>,
}

impl From<&SummarizerApiResponse> for SummaryView {
    fn from(response: &SummarizerApiResponse) -> Self {
        let sources = response
            .enrichments
            .as_ref()
            .and_then(|e| e.context.as_ref())
            .map(|context| {
                context
                    .iter()
                    .map(|c| SourceView {
                        title: c.title.clone(),
                        url: c.url.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: response.title.clone(),
            summary: render_summary(response.summary.as_deref().unwrap_or_default()),
            followups: response.followups.clone(),
            sources,
        }
    }
}

/// Concatenate summary messages into markdown text.
///
/// Tokens are appended as-is, inline references become `[n](url)` and
/// enumerations become bullet lines.
pub fn render_summary(messages: &[SummaryMessage]) -> String {
    let mut text = String::new();
    let mut reference: u64 = 0;

    for message in messages {
        match message.kind.as_str() {
            "token" => text.push_str(message.data.as_str().unwrap_or_default()),
            "inline_reference" => {
                reference += 1;
                let number = message
                    .data
                    .get("number")
                    .and_then(Value::as_u64)
                    .unwrap_or(reference);
                if let Some(url) = message.data.get("url").and_then(Value::as_str) {
                    text.push_str(&format!(" [{}]({})", number, url));
                }
            }
            "enum_start" | "enum_end" => text.push('\n'),
            "enum_item" => {
                let item = message
                    .data
                    .get("text")
                    .and_then(Value::as_str)
                    .or(message.data.as_str())
                    .unwrap_or_default();
                text.push_str("\n- ");
                text.push_str(item);
            }
            other => warn!("Ignoring summary message of type '{}'", other),
        }
    }

    text.trim().to_string()
}

/// Summarizer tool.
pub struct SummarizerTool;

#[async_trait::async_trait]
impl SearchTool for SummarizerTool {
    const NAME: &'static str = "brave_summarizer";
    const TITLE: &'static str = "Brave Summarizer";
    const DESCRIPTION: &'static str = "Retrieves an AI-generated summary of web search results using the Brave Search API. \
        First call brave_web_search with \"summary\": true, then pass the returned summarizer_key here.\n\n\
        Returns the summary text, its sources and suggested follow-up queries.\n\n\
        Example input: {\"key\": \"<summarizer_key>\", \"inline_references\": true}.\n\n\
        With inline_references enabled the summary cites its sources as markdown links, \
        e.g. \"Rust 1.0 was released in 2015 [1](https://blog.rust-lang.org/2015/05/15/Rust-1.0.html).\"";

    type Params = SummarizerParams;

    #[instrument(skip_all)]
    async fn execute(api: &BraveApi, params: SummarizerParams) -> Result<CallToolResult, ToolError> {
        if params.key.trim().is_empty() {
            return Err(ToolError::invalid_arguments("key must not be empty"));
        }
        info!("Fetching summary");

        let response: SummarizerApiResponse =
            api.issue_request(Endpoint::Summarizer, &params).await?;

        match response.status.as_deref() {
            None | Some(STATUS_COMPLETE) => {}
            Some(status) => {
                return Err(ToolError::execution_failed(format!(
                    "Summary is not available (status: {})",
                    status
                )));
            }
        }

        let view = SummaryView::from(&response);
        if view.summary.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(
                "No summary available for this key",
            )]));
        }

        Ok(CallToolResult::success(vec![json_block(&view)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{api_for, json_values};
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn messages(value: Value) -> Vec<SummaryMessage> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_render_tokens_and_references() {
        let rendered = render_summary(&messages(json!([
            {"type": "token", "data": "Rust is "},
            {"type": "token", "data": "a systems language."},
            {"type": "inline_reference", "data": {"url": "https://rust-lang.org"}}
        ])));
        assert_eq!(rendered, "Rust is a systems language. [1](https://rust-lang.org)");
    }

    #[test]
    fn test_render_enumeration() {
        let rendered = render_summary(&messages(json!([
            {"type": "token", "data": "Features:"},
            {"type": "enum_start"},
            {"type": "enum_item", "data": {"text": "ownership"}},
            {"type": "enum_item", "data": {"text": "traits"}},
            {"type": "enum_end"}
        ])));
        assert_eq!(rendered, "Features:\n\n- ownership\n- traits");
    }

    #[tokio::test]
    async fn test_execute_complete() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summarizer/search"))
            .and(query_param("key", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "complete",
                "title": "Rust",
                "summary": [{"type": "token", "data": "A language."}],
                "enrichments": {"context": [{"title": "Rust", "url": "https://rust-lang.org"}]},
                "followups": ["What is cargo?"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let params = serde_json::from_value(json!({"key": "abc"})).unwrap();
        let result = SummarizerTool::execute(&api, params).await.unwrap();

        let values = json_values(&result);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["summary"], "A language.");
        assert_eq!(values[0]["sources"][0]["url"], "https://rust-lang.org");
        assert_eq!(values[0]["followups"][0], "What is cargo?");
    }

    #[tokio::test]
    async fn test_execute_incomplete_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summarizer/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "failed"})))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let params = serde_json::from_value(json!({"key": "abc"})).unwrap();
        let result = SummarizerTool::execute(&api, params).await;
        assert!(matches!(result, Err(ToolError::ExecutionFailed(_))));
    }

    #[test]
    fn test_key_is_required() {
        let result: Result<SummarizerParams, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }
}
