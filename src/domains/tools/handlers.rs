//! Tool handler trait.
//!
//! Every search tool implements [`SearchTool`]: static metadata, a typed
//! parameter struct, and an async `execute` that calls the Brave Search API
//! and projects the response into content blocks.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ToolError;
use crate::domains::brave::BraveApi;

/// A tool backed by one Brave Search category.
#[async_trait::async_trait]
pub trait SearchTool: Send + Sync + 'static {
    /// Tool name as registered in MCP. Unique across the registry.
    const NAME: &'static str;

    /// Display title.
    const TITLE: &'static str;

    /// Usage guidance shown to the calling agent.
    const DESCRIPTION: &'static str;

    /// Parameters accepted by the tool; also the input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the search and project the results.
    async fn execute(api: &BraveApi, params: Self::Params) -> Result<CallToolResult, ToolError>;
}

/// Map a tool outcome onto the MCP result.
///
/// Caller mistakes become protocol errors; upstream and execution failures
/// become a tool result flagged `isError` so the agent can read the message.
pub fn into_call_result(
    result: Result<CallToolResult, ToolError>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(result) => Ok(result),
        Err(e) if e.is_client_error() => Err(McpError::invalid_params(e.to_string(), None)),
        Err(e) => {
            warn!("Tool execution failed: {}", e);
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}
