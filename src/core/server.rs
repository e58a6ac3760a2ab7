//! MCP Server implementation and lifecycle management.
//!
//! [`McpServer::create`] composes a server from the resolved configuration
//! and the tool registry: overrides are applied first, then every permitted
//! tool is registered in registry order. Composition never binds a
//! transport; the same server value is served over stdio or HTTP.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolRouter,
    model::*,
    service::RequestContext,
    tool_handler,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::config::{Config, ConfigOverrides, LoggingLevel};
use crate::domains::brave::BraveApi;
use crate::domains::tools::{
    ToolDefinition, ToolError, ToolRegistry, build_tool_router, into_call_result,
};

/// Options applied while composing a server.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Late configuration supplied by the hosting environment.
    pub overrides: Option<ConfigOverrides>,
}

impl ServerOptions {
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }
}

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: configuration, client and tool list are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Effective configuration (overrides applied).
    config: Arc<Config>,

    /// Tools registered on this server, in registration order.
    tools: Arc<Vec<ToolDefinition>>,

    /// Shared Brave Search client.
    api: Arc<BraveApi>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Compose a server from `config` and `registry`.
    ///
    /// Builds a fresh Brave client; use [`McpServer::with_api`] to compose
    /// against an existing one.
    pub fn create(
        config: &Config,
        registry: &ToolRegistry,
        options: Option<&ServerOptions>,
    ) -> super::error::Result<Self> {
        let api = Arc::new(BraveApi::from_config(config)?);
        Ok(Self::with_api(config, registry, options, &api))
    }

    /// Compose a server that issues requests through `api`'s connection pool.
    ///
    /// The client is reused as is when the effective key matches its own;
    /// otherwise only the key is swapped.
    pub fn with_api(
        config: &Config,
        registry: &ToolRegistry,
        options: Option<&ServerOptions>,
        api: &Arc<BraveApi>,
    ) -> Self {
        let config = match options.and_then(|o| o.overrides.as_ref()) {
            Some(overrides) => config.with_overrides(overrides),
            None => config.clone(),
        };

        let api = if api.api_key() == config.credentials.brave_api_key.as_deref() {
            api.clone()
        } else {
            Arc::new(api.with_api_key(config.credentials.brave_api_key.clone()))
        };
        if !api.has_api_key() {
            debug!("Composing without a Brave API key; tool calls will report an error");
        }
        let tools = select_tools(&config, registry);
        let tool_router = build_tool_router(tools.iter(), api.clone());

        info!(
            "Composed {} with {} tool(s): {}",
            config.server.name,
            tools.len(),
            tools.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ")
        );

        Self {
            config: Arc::new(config),
            tools: Arc::new(tools),
            api,
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Names of the registered tools, in registration order.
    pub fn registered_tools(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List the registered tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }

    /// Call a registered tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            return into_call_result(Err(ToolError::not_found(name)));
        };
        into_call_result(tool.call(self.api.clone(), arguments).await)
    }
}

/// Composes servers on demand from a fixed configuration and registry.
///
/// The stdio transport composes once; the HTTP transport composes per
/// session (or per request when stateless), each time with that caller's
/// overrides. Every composed server shares the factory's HTTP client.
#[derive(Debug, Clone)]
pub struct ServerFactory {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    api: Arc<BraveApi>,
}

impl ServerFactory {
    pub fn new(config: Config, registry: ToolRegistry) -> super::error::Result<Self> {
        let api = Arc::new(BraveApi::from_config(&config)?);
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            api,
        })
    }

    /// The resolved base configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compose a server, applying `options` on top of the base configuration.
    pub fn create(&self, options: Option<&ServerOptions>) -> McpServer {
        McpServer::with_api(&self.config, &self.registry, options, &self.api)
    }
}

/// Permitted tools of `registry`, first registration of each name wins.
fn select_tools(config: &Config, registry: &ToolRegistry) -> Vec<ToolDefinition> {
    let mut selected: Vec<ToolDefinition> = Vec::new();

    for tool in registry.iter() {
        if !config.is_tool_permitted(tool.name()) {
            debug!("Tool {} is not permitted, skipping", tool.name());
            continue;
        }
        if selected.iter().any(|t| t.name() == tool.name()) {
            warn!("Tool {} is already registered, rejecting duplicate", tool.name());
            continue;
        }
        selected.push(tool.clone());
    }

    selected
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_logging()
            .build();
        capabilities.tools = Some(ToolsCapability {
            list_changed: Some(false),
        });

        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.server.name.clone();
        server_info.title = Some(self.config.server.title.clone());
        server_info.version = self.config.server.version.clone();

        ServerInfo {
            instructions: Some(self.config.server.instructions.clone()),
            capabilities,
            server_info,
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn set_level(
        &self,
        request: SetLevelRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<(), McpError> {
        let level = LoggingLevel::from(request.level);
        info!("Client requested logging level {}", level);
        Ok(())
    }
}
