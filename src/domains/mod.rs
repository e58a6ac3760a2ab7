//! Domains module containing business logic organized by bounded contexts.
//!
//! - **brave**: the Brave Search API gateway and its response types
//! - **tools**: the MCP tools built on top of it

pub mod brave;
pub mod tools;
