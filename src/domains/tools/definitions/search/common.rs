//! Common utilities shared across the Brave search tools.
//!
//! Parameter defaults and validation, plus helpers that turn projected
//! results into MCP content blocks.

use chrono::NaiveDate;
use rmcp::model::Content;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::brave::types::Thumbnail;
use crate::domains::tools::ToolError;

/// Maximum query length in characters.
pub const MAX_QUERY_CHARS: usize = 400;

/// Maximum number of words in a query.
pub const MAX_QUERY_WORDS: usize = 50;

/// Largest accepted pagination offset.
pub const MAX_OFFSET: u32 = 9;

pub fn default_country() -> String {
    "US".to_string()
}

pub fn default_search_lang() -> String {
    "en".to_string()
}

pub fn default_ui_lang() -> String {
    "en-US".to_string()
}

pub fn default_true() -> bool {
    true
}

/// Adult content filtering level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Off,
    #[default]
    Moderate,
    Strict,
}

/// Measurement system used in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

// ============================================================================
// Validation
// ============================================================================

/// Check that a query is non-empty and within the API limits.
pub fn validate_query(query: &str) -> Result<(), ToolError> {
    if query.trim().is_empty() {
        return Err(ToolError::invalid_arguments("query must not be empty"));
    }

    let chars = query.chars().count();
    if chars > MAX_QUERY_CHARS {
        return Err(ToolError::invalid_arguments(format!(
            "query must be at most {} characters, got {}",
            MAX_QUERY_CHARS, chars
        )));
    }

    let words = query.split_whitespace().count();
    if words > MAX_QUERY_WORDS {
        return Err(ToolError::invalid_arguments(format!(
            "query must be at most {} words, got {}",
            MAX_QUERY_WORDS, words
        )));
    }

    Ok(())
}

/// Check that `value` lies in `min..=max`.
pub fn validate_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ToolError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )))
    }
}

/// Accepts `pd`, `pw`, `pm`, `py` or a `YYYY-MM-DDtoYYYY-MM-DD` range.
pub fn validate_freshness(freshness: Option<&str>) -> Result<(), ToolError> {
    let Some(freshness) = freshness else {
        return Ok(());
    };

    if matches!(freshness, "pd" | "pw" | "pm" | "py") {
        return Ok(());
    }

    let range = freshness.split_once("to").and_then(|(from, to)| {
        let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
        let to = NaiveDate::parse_from_str(to, "%Y-%m-%d").ok()?;
        Some((from, to))
    });

    match range {
        Some((from, to)) if from <= to => Ok(()),
        _ => Err(ToolError::invalid_arguments(format!(
            "freshness must be one of pd, pw, pm, py or YYYY-MM-DDtoYYYY-MM-DD, got '{}'",
            freshness
        ))),
    }
}

// ============================================================================
// Result helpers
// ============================================================================

/// Serialize one projected result as a JSON text block.
pub fn json_block<T: Serialize>(value: &T) -> Result<Content, ToolError> {
    Ok(Content::text(serde_json::to_string(value)?))
}

/// Serialize every projected result, one block each.
pub fn json_blocks<T: Serialize>(values: &[T]) -> Result<Vec<Content>, ToolError> {
    values.iter().map(json_block).collect()
}

pub fn thumbnail_src(thumbnail: &Option<Thumbnail>) -> Option<String> {
    thumbnail.as_ref().and_then(|t| t.src.clone())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use rmcp::model::{CallToolResult, RawContent};
    use wiremock::MockServer;

    use crate::domains::brave::BraveApi;

    /// Client pointed at a mock server, with a test key.
    pub fn api_for(server: &MockServer) -> BraveApi {
        BraveApi::new(server.uri(), Some("test-key".to_string()), Duration::from_secs(5))
            .expect("client")
    }

    /// Text of every content block.
    pub fn texts(result: &CallToolResult) -> Vec<String> {
        result
            .content
            .iter()
            .map(|c| match &c.raw {
                RawContent::Text(text) => text.text.clone(),
                _ => panic!("Expected text content"),
            })
            .collect()
    }

    /// Content blocks parsed back into JSON values.
    pub fn json_values(result: &CallToolResult) -> Vec<serde_json::Value> {
        texts(result)
            .iter()
            .map(|t| serde_json::from_str(t).expect("block is JSON"))
            .collect()
    }
}
