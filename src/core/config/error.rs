//! Configuration error types.

use thiserror::Error;

use super::LoggingLevel;

/// Errors detected while resolving the startup configuration.
///
/// These are reported to the operator and abort startup; they never reach an
/// MCP client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Allow-list and deny-list were both given.
    #[error("--enabled-tools and --disabled-tools cannot be used together")]
    MutuallyExclusiveToolLists,

    /// A tool list names a tool that does not exist.
    #[error("Invalid tool name used: '{name}'. Must be one of: {}", .valid.join(", "))]
    UnknownTool { name: String, valid: Vec<String> },

    /// Transport is neither `stdio` nor `http`.
    #[error("Invalid --transport value: '{0}'. Must be one of: stdio, http.")]
    InvalidTransport(String),

    /// Logging level is not an MCP logging level.
    #[error(
        "Invalid --logging-level value: '{0}'. Must be one of: {expected}",
        expected = LoggingLevel::expected()
    )]
    InvalidLoggingLevel(String),

    /// Port is not an integer in 1..=65535.
    #[error("Invalid --port value: '{0}'. Must be a valid port number between 1 and 65535.")]
    InvalidPort(String),

    /// Host is empty while the HTTP transport is selected.
    #[error("--host is required for the http transport")]
    MissingHost,

    /// An injected configuration document could not be decoded.
    #[error("Invalid injected configuration: {0}")]
    InvalidOverrides(String),
}

impl ConfigError {
    /// Create an "unknown tool" error listing the valid names.
    pub fn unknown_tool(name: impl Into<String>, valid: &[&str]) -> Self {
        Self::UnknownTool {
            name: name.into(),
            valid: valid.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_logging_level_lists_levels() {
        let message = ConfigError::InvalidLoggingLevel("verbose".to_string()).to_string();
        assert!(message.starts_with("Invalid --logging-level value: 'verbose'."));
        assert!(message.ends_with(&LoggingLevel::expected()));
        assert!(message.contains("debug"));
    }

    #[test]
    fn test_unknown_tool_lists_valid_names() {
        let err = ConfigError::unknown_tool("brave_nope", &["brave_web_search", "brave_news_search"]);
        assert_eq!(
            err.to_string(),
            "Invalid tool name used: 'brave_nope'. Must be one of: brave_web_search, brave_news_search"
        );
    }
}
