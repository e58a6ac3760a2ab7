//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps one Brave Search category.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `SearchTool` trait and result mapping
//! - `registry.rs` - Tool definitions and the ordered registry
//! - `router.rs` - Builds the rmcp ToolRouter from definitions
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `SearchTool`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolRegistry::build()` in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::{SearchTool, into_call_result};
pub use registry::{ToolDefinition, ToolRegistry};
pub use router::build_tool_router;
