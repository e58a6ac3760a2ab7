//! Tool Registry - the ordered catalog of every search tool.
//!
//! The registry is built explicitly with [`ToolRegistry::build`] and handed
//! to the configuration resolver (name validation) and the server composer
//! (registration). It is read-only once built.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool, ToolAnnotations},
};

use super::definitions::{
    ImageSearchTool, LocalSearchTool, NewsSearchTool, SummarizerTool, VideoSearchTool,
    WebSearchTool,
};
use super::error::ToolError;
use super::handlers::{SearchTool, into_call_result};
use crate::domains::brave::BraveApi;

type ExecuteFn =
    fn(Arc<BraveApi>, JsonObject) -> BoxFuture<'static, Result<CallToolResult, ToolError>>;

// ============================================================================
// Tool Definition
// ============================================================================

/// Immutable description of one tool plus its type-erased executor.
#[derive(Clone)]
pub struct ToolDefinition {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
    annotations: ToolAnnotations,
    execute: ExecuteFn,
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl ToolDefinition {
    /// Describe the tool `T`.
    pub fn of<T: SearchTool>() -> Self {
        Self {
            name: T::NAME,
            title: T::TITLE,
            description: T::DESCRIPTION,
            input_schema: cached_schema_for_type::<T::Params>(),
            annotations: ToolAnnotations {
                title: Some(T::TITLE.to_string()),
                read_only_hint: Some(true),
                destructive_hint: Some(false),
                idempotent_hint: None,
                open_world_hint: Some(true),
            },
            execute: execute_tool::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn annotations(&self) -> &ToolAnnotations {
        &self.annotations
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: Some(self.annotations.clone()),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(self.name.to_string()),
        }
    }

    /// Deserialize `arguments` and run the tool.
    pub async fn call(
        &self,
        api: Arc<BraveApi>,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        (self.execute)(api, arguments).await
    }

    /// Create a ToolRoute binding this tool to a server's router.
    pub fn create_route<S>(&self, api: Arc<BraveApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let definition = self.clone();
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            let definition = definition.clone();
            async move { into_call_result(definition.call(api, args).await) }.boxed()
        })
    }
}

fn execute_tool<T: SearchTool>(
    api: Arc<BraveApi>,
    arguments: JsonObject,
) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
    async move {
        let params: T::Params = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        T::execute(&api, params).await
    }
    .boxed()
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Ordered mapping from tool name to definition.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Build the registry of every available tool, in catalog order.
    pub fn build() -> Self {
        Self::from_definitions(vec![
            ToolDefinition::of::<WebSearchTool>(),
            ToolDefinition::of::<LocalSearchTool>(),
            ToolDefinition::of::<VideoSearchTool>(),
            ToolDefinition::of::<ImageSearchTool>(),
            ToolDefinition::of::<NewsSearchTool>(),
            ToolDefinition::of::<SummarizerTool>(),
        ])
    }

    /// Build a registry from explicit definitions, kept in the given order.
    pub fn from_definitions(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    /// Get all tool names, in order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Whether a tool with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a tool by name (first match).
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Iterate over the definitions in order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::build();
        assert_eq!(
            registry.tool_names(),
            vec![
                "brave_web_search",
                "brave_local_search",
                "brave_video_search",
                "brave_image_search",
                "brave_news_search",
                "brave_summarizer",
            ]
        );
    }

    #[test]
    fn test_registry_names_are_unique() {
        let names = ToolRegistry::build().tool_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ToolRegistry::build();
        assert!(registry.contains("brave_news_search"));
        assert!(!registry.contains("brave_nonexistent"));
        assert_eq!(
            registry.get("brave_image_search").map(|t| t.title()),
            Some("Brave Image Search")
        );
    }

    #[test]
    fn test_from_definitions_keeps_order() {
        let registry = ToolRegistry::from_definitions(vec![
            ToolDefinition::of::<SummarizerTool>(),
            ToolDefinition::of::<WebSearchTool>(),
        ]);
        assert_eq!(registry.tool_names(), vec!["brave_summarizer", "brave_web_search"]);
    }

    #[test]
    fn test_tool_metadata() {
        for tool in ToolRegistry::build().get_all_tools() {
            let annotations = tool.annotations.expect("annotations");
            assert_eq!(annotations.open_world_hint, Some(true));
            assert_eq!(annotations.read_only_hint, Some(true));
            assert!(tool.description.is_some());
            assert!(tool.input_schema.contains_key("properties"));
        }
    }

    #[test]
    fn test_tool_title_is_name_and_display_title_in_annotations() {
        let registry = ToolRegistry::build();
        let image = registry.get("brave_image_search").unwrap().to_tool();

        assert_eq!(image.title.as_deref(), Some("brave_image_search"));
        assert_eq!(
            image.annotations.and_then(|a| a.title).as_deref(),
            Some("Brave Image Search")
        );
    }

    #[test]
    fn test_descriptions_show_input_and_output_examples() {
        let registry = ToolRegistry::build();
        for tool in registry.iter() {
            assert!(
                tool.description().contains("Example input"),
                "{} has no input example",
                tool.name()
            );
        }

        let image = registry.get("brave_image_search").unwrap().description();
        assert!(image.contains("![image.title](image.properties.url)"));

        let news = registry.get("brave_news_search").unwrap().description();
        assert!(news.contains("cite sources with hyperlinks"));
        assert!(news.contains("[Reuters](https://"));
    }

    #[tokio::test]
    async fn test_call_rejects_bad_arguments() {
        let registry = ToolRegistry::build();
        let api = Arc::new(
            BraveApi::new("http://127.0.0.1:9", None, std::time::Duration::from_secs(1)).unwrap(),
        );
        let tool = registry.get("brave_news_search").unwrap();
        let result = tool.call(api, JsonObject::new()).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
