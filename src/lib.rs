//! Brave Search MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes the Brave Search API
//! (web, local, video, image and news search plus the summarizer) as tools.
//!
//! # Architecture
//!
//! - **core**: configuration resolution, error handling, server composition
//!   and transports (stdio, HTTP)
//! - **domains**: business logic organized by bounded contexts
//!   - **brave**: HTTP gateway to the Brave Search API
//!   - **tools**: one MCP tool per search category, plus the registry
//!
//! # Example
//!
//! ```rust,no_run
//! use brave_search_mcp_server::core::{Config, McpServer};
//! use brave_search_mcp_server::domains::tools::ToolRegistry;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = ToolRegistry::build();
//!     let config = Config::from_process(&registry)?;
//!     let server = McpServer::create(&config, &registry, None)?;
//!     println!("{:?}", server.registered_tools());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, ServerFactory, ServerOptions};
pub use domains::tools::ToolRegistry;
