//! Tool Router - builds the rmcp ToolRouter from tool definitions.
//!
//! Each definition knows how to create its own route; the composer decides
//! which definitions are passed in.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolDefinition;
use crate::domains::brave::BraveApi;

/// Build a tool router with a route for every given definition.
pub fn build_tool_router<'a, S, I>(tools: I, api: Arc<BraveApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
    I: IntoIterator<Item = &'a ToolDefinition>,
{
    tools
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(tool.create_route(api.clone()))
        })
}
