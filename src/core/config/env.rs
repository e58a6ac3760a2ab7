//! Environment variable sources.

use std::collections::HashMap;

pub const BRAVE_API_KEY: &str = "BRAVE_API_KEY";
pub const LOG_LEVEL: &str = "BRAVE_MCP_LOG_LEVEL";
pub const TRANSPORT: &str = "BRAVE_MCP_TRANSPORT";
pub const ENABLED_TOOLS: &str = "BRAVE_MCP_ENABLED_TOOLS";
pub const DISABLED_TOOLS: &str = "BRAVE_MCP_DISABLED_TOOLS";
pub const PORT: &str = "BRAVE_MCP_PORT";
pub const HOST: &str = "BRAVE_MCP_HOST";
pub const STATELESS: &str = "BRAVE_MCP_STATELESS";

/// A source of environment variables.
///
/// Resolution reads the environment through this trait so it can be driven
/// by a plain map in tests.
pub trait EnvSource {
    /// Look up a variable; `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Split a space-separated list as found in `BRAVE_MCP_*_TOOLS`.
pub fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(String::from).collect()
}
