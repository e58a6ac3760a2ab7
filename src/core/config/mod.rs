//! Configuration management for the MCP server.
//!
//! The configuration is resolved once at startup from command line flags,
//! environment variables and built-in defaults (in that order of
//! precedence), validated against the tool registry, and then shared
//! read-only. Hosting environments that supply settings later (per session)
//! derive a new value with [`Config::with_overrides`] instead of mutating the
//! shared one.

mod cli;
pub mod env;
mod error;
mod overrides;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info};

use super::transport::{HttpConfig, TransportConfig};
use crate::domains::brave::DEFAULT_BASE_URL;
use crate::domains::tools::ToolRegistry;

pub use cli::CliArgs;
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use overrides::ConfigOverrides;

/// Default port of the HTTP transport.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind host of the HTTP transport.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Brave Search API client settings.
    pub api: BraveApiConfig,

    /// Which tools may be registered.
    pub tools: ToolFilter,

    /// Whether the HTTP transport keeps no per-client session.
    pub stateless: bool,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// Human readable title.
    pub title: String,

    /// The version of the server.
    pub version: String,

    /// Usage instructions sent on initialize.
    pub instructions: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum severity.
    pub level: LoggingLevel,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Brave Search subscription token. Optional at startup: some hosting
    /// modes inject it per session.
    pub brave_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "brave_api_key",
                &self.brave_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Brave Search API client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BraveApiConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BraveApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Allow-list / deny-list of tool names.
///
/// A non-empty `enabled` list restricts registration to exactly those tools;
/// otherwise every tool not in `disabled` is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFilter {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
}

impl ToolFilter {
    /// Build a filter, dropping blank names.
    pub fn new(enabled: Vec<String>, disabled: Vec<String>) -> Self {
        Self {
            enabled: normalize_tool_names(enabled),
            disabled: normalize_tool_names(disabled),
        }
    }

    /// Whether `name` may be registered.
    pub fn is_permitted(&self, name: &str) -> bool {
        if self.enabled.is_empty() {
            !self.disabled.iter().any(|d| d == name)
        } else {
            self.enabled.iter().any(|e| e == name)
        }
    }
}

/// Trim names and drop whitespace-only entries.
pub(crate) fn normalize_tool_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// MCP logging severities, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl LoggingLevel {
    /// Every level, lowest first.
    pub const ALL: [LoggingLevel; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
        }
    }

    /// Comma-separated list of accepted values, for error messages.
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The closest `tracing` level.
    pub fn tracing_level(&self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info | Self::Notice => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Critical | Self::Alert | Self::Emergency => Level::ERROR,
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggingLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidLoggingLevel(s.to_string()))
    }
}

impl From<rmcp::model::LoggingLevel> for LoggingLevel {
    fn from(level: rmcp::model::LoggingLevel) -> Self {
        use rmcp::model::LoggingLevel as Mcp;
        match level {
            Mcp::Debug => Self::Debug,
            Mcp::Info => Self::Info,
            Mcp::Notice => Self::Notice,
            Mcp::Warning => Self::Warning,
            Mcp::Error => Self::Error,
            Mcp::Critical => Self::Critical,
            Mcp::Alert => Self::Alert,
            Mcp::Emergency => Self::Emergency,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "brave-search-mcp-server".to_string(),
                title: "Brave Search MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                instructions: "Use this server to search the Web for various types of data via the Brave Search API.".to_string(),
            },
            logging: LoggingConfig {
                level: LoggingLevel::Info,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: BraveApiConfig::default(),
            tools: ToolFilter::default(),
            stateless: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configuration of this process.
    ///
    /// Loads `.env` if present, then reads the real command line and
    /// environment.
    pub fn from_process(registry: &ToolRegistry) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let cli = CliArgs::parse_lenient(std::env::args_os());
        Self::resolve(cli, &ProcessEnv, registry)
    }

    /// Merge CLI flags, environment and defaults, then validate.
    ///
    /// For every field the CLI value wins over the environment variable,
    /// which wins over the default. Validation mirrors the operator-facing
    /// flags, so error messages name the flag.
    pub fn resolve(
        cli: CliArgs,
        env: &impl EnvSource,
        registry: &ToolRegistry,
    ) -> Result<Self, ConfigError> {
        let pick = |value: Option<String>, key: &str| value.or_else(|| env.var(key));

        let enabled = cli
            .enabled_tools
            .or_else(|| env.var(env::ENABLED_TOOLS).map(|v| env::split_list(&v)))
            .unwrap_or_default();
        let disabled = cli
            .disabled_tools
            .or_else(|| env.var(env::DISABLED_TOOLS).map(|v| env::split_list(&v)))
            .unwrap_or_default();
        let tools = ToolFilter::new(enabled, disabled);

        if !tools.enabled.is_empty() && !tools.disabled.is_empty() {
            return Err(ConfigError::MutuallyExclusiveToolLists);
        }

        let valid = registry.tool_names();
        if let Some(unknown) = tools
            .enabled
            .iter()
            .chain(tools.disabled.iter())
            .find(|name| !registry.contains(name))
        {
            return Err(ConfigError::unknown_tool(unknown.clone(), &valid));
        }

        let transport = pick(cli.transport, env::TRANSPORT).unwrap_or_else(|| "stdio".to_string());
        if !matches!(transport.as_str(), "stdio" | "http") {
            return Err(ConfigError::InvalidTransport(transport));
        }

        let level: LoggingLevel = pick(cli.logging_level, env::LOG_LEVEL)
            .unwrap_or_else(|| LoggingLevel::Info.as_str().to_string())
            .parse()?;

        let transport = if transport == "http" {
            let port = pick(cli.port, env::PORT).unwrap_or_else(|| DEFAULT_PORT.to_string());
            let port = parse_port(&port)?;

            let host = pick(cli.host, env::HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
            if host.trim().is_empty() {
                return Err(ConfigError::MissingHost);
            }

            TransportConfig::Http(HttpConfig {
                port,
                host,
                ..HttpConfig::default()
            })
        } else {
            TransportConfig::Stdio
        };

        let brave_api_key = pick(cli.brave_api_key, env::BRAVE_API_KEY).filter(|k| !k.is_empty());
        let stateless = pick(cli.stateless, env::STATELESS)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let config = Self {
            logging: LoggingConfig { level },
            transport,
            credentials: CredentialsConfig { brave_api_key },
            tools,
            stateless,
            ..Self::default()
        };

        if config.credentials.brave_api_key.is_none() {
            info!("No Brave API key configured at startup; expecting one to be injected later");
        }
        debug!(?config, "Configuration resolved");

        Ok(config)
    }

    /// Whether the tool `name` may be registered.
    pub fn is_tool_permitted(&self, name: &str) -> bool {
        self.tools.is_permitted(name)
    }
}

/// Parse a port, accepting only integers in 1..=65535.
fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|p| (1..=i64::from(u16::MAX)).contains(p))
        .and_then(|p| u16::try_from(p).ok())
        .ok_or_else(|| ConfigError::InvalidPort(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn registry() -> ToolRegistry {
        ToolRegistry::build()
    }

    fn no_env() -> HashMap<&'static str, &'static str> {
        HashMap::new()
    }

    fn resolve(cli: CliArgs, env: &HashMap<&str, &str>) -> Result<Config, ConfigError> {
        Config::resolve(cli, env, &registry())
    }

    fn tools(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_defaults() {
        let config = resolve(CliArgs::default(), &no_env()).unwrap();
        assert!(config.transport.is_stdio());
        assert_eq!(config.logging.level, LoggingLevel::Info);
        assert!(config.credentials.brave_api_key.is_none());
        assert!(config.tools.enabled.is_empty());
        assert!(config.tools.disabled.is_empty());
        assert!(!config.stateless);
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = HashMap::from([
            (env::BRAVE_API_KEY, "from-env"),
            (env::LOG_LEVEL, "debug"),
        ]);
        let cli = CliArgs {
            brave_api_key: Some("from-cli".to_string()),
            ..Default::default()
        };
        let config = resolve(cli, &env).unwrap();
        assert_eq!(config.credentials.brave_api_key.as_deref(), Some("from-cli"));
        assert_eq!(config.logging.level, LoggingLevel::Debug);
    }

    #[test]
    fn test_env_tool_lists_are_space_separated() {
        let env = HashMap::from([(env::ENABLED_TOOLS, " brave_news_search  brave_web_search ")]);
        let config = resolve(CliArgs::default(), &env).unwrap();
        assert_eq!(
            config.tools.enabled,
            vec!["brave_news_search".to_string(), "brave_web_search".to_string()]
        );
    }

    #[test]
    fn test_both_tool_lists_rejected() {
        let cli = CliArgs {
            enabled_tools: tools(&["brave_news_search"]),
            disabled_tools: tools(&["brave_image_search"]),
            ..Default::default()
        };
        assert_eq!(
            resolve(cli, &no_env()).unwrap_err(),
            ConfigError::MutuallyExclusiveToolLists
        );
    }

    #[test]
    fn test_cli_list_and_env_list_rejected() {
        let env = HashMap::from([(env::DISABLED_TOOLS, "brave_image_search")]);
        let cli = CliArgs {
            enabled_tools: tools(&["brave_news_search"]),
            ..Default::default()
        };
        assert_eq!(
            resolve(cli, &env).unwrap_err(),
            ConfigError::MutuallyExclusiveToolLists
        );
    }

    #[test]
    fn test_unknown_tool_lists_valid_names() {
        let cli = CliArgs {
            disabled_tools: tools(&["brave_nonexistent"]),
            ..Default::default()
        };
        let err = resolve(cli, &no_env()).unwrap_err();
        let valid: Vec<String> = registry().tool_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(
            err,
            ConfigError::UnknownTool {
                name: "brave_nonexistent".to_string(),
                valid: valid.clone(),
            }
        );
        assert!(err.to_string().ends_with(&valid.join(", ")));
    }

    #[test]
    fn test_whitespace_only_tool_names_ignored() {
        let cli = CliArgs {
            enabled_tools: tools(&["  ", ""]),
            disabled_tools: tools(&["brave_image_search"]),
            ..Default::default()
        };
        let config = resolve(cli, &no_env()).unwrap();
        assert!(config.tools.enabled.is_empty());
        assert!(!config.is_tool_permitted("brave_image_search"));
    }

    #[test]
    fn test_invalid_transport() {
        let cli = CliArgs {
            transport: Some("tcp".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve(cli, &no_env()).unwrap_err(),
            ConfigError::InvalidTransport("tcp".to_string())
        );
    }

    #[test]
    fn test_invalid_logging_level() {
        let env = HashMap::from([(env::LOG_LEVEL, "verbose")]);
        let err = resolve(CliArgs::default(), &env).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLoggingLevel("verbose".to_string()));
        assert!(err.to_string().contains("debug, info, notice, warning"));
    }

    #[test]
    fn test_http_port_out_of_range() {
        for port in ["0", "70000", "-1", "eighty"] {
            let cli = CliArgs {
                transport: Some("http".to_string()),
                port: Some(port.to_string()),
                ..Default::default()
            };
            assert_eq!(
                resolve(cli, &no_env()).unwrap_err(),
                ConfigError::InvalidPort(port.to_string())
            );
        }
    }

    #[test]
    fn test_http_valid_port_and_host() {
        let cli = CliArgs {
            transport: Some("http".to_string()),
            port: Some("8080".to_string()),
            host: Some("0.0.0.0".to_string()),
            ..Default::default()
        };
        let config = resolve(cli, &no_env()).unwrap();
        match config.transport {
            TransportConfig::Http(http) => {
                assert_eq!(http.port, 8080);
                assert_eq!(http.host, "0.0.0.0");
            }
            other => panic!("Expected HTTP transport, got {:?}", other),
        }
    }

    #[test]
    fn test_http_empty_host_rejected() {
        let env = HashMap::from([
            (env::TRANSPORT, "http"),
            (env::HOST, ""),
        ]);
        assert_eq!(
            resolve(CliArgs::default(), &env).unwrap_err(),
            ConfigError::MissingHost
        );
    }

    #[test]
    fn test_port_ignored_for_stdio() {
        let cli = CliArgs {
            port: Some("0".to_string()),
            ..Default::default()
        };
        assert!(resolve(cli, &no_env()).is_ok());
    }

    #[test]
    fn test_stateless_flag() {
        let env = HashMap::from([(env::STATELESS, "true")]);
        assert!(resolve(CliArgs::default(), &env).unwrap().stateless);

        let cli = CliArgs {
            stateless: Some("false".to_string()),
            ..Default::default()
        };
        assert!(!resolve(cli, &env).unwrap().stateless);
    }

    #[test]
    fn test_all_tools_permitted_by_default() {
        let config = resolve(CliArgs::default(), &no_env()).unwrap();
        for name in registry().tool_names() {
            assert!(config.is_tool_permitted(name));
        }
    }

    #[test]
    fn test_allow_list_mode() {
        let cli = CliArgs {
            enabled_tools: tools(&["brave_news_search"]),
            ..Default::default()
        };
        let config = resolve(cli, &no_env()).unwrap();
        assert!(config.is_tool_permitted("brave_news_search"));
        assert!(!config.is_tool_permitted("brave_image_search"));
    }

    #[test]
    fn test_deny_list_mode() {
        let cli = CliArgs {
            disabled_tools: tools(&["brave_image_search"]),
            ..Default::default()
        };
        let config = resolve(cli, &no_env()).unwrap();
        assert!(!config.is_tool_permitted("brave_image_search"));
        for name in registry().tool_names() {
            if name != "brave_image_search" {
                assert!(config.is_tool_permitted(name), "{} should be permitted", name);
            }
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            brave_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_logging_level_round_trip_names() {
        for level in LoggingLevel::ALL {
            assert_eq!(level.as_str().parse::<LoggingLevel>().unwrap(), level);
        }
        assert_eq!(LoggingLevel::Notice.tracing_level(), Level::INFO);
        assert_eq!(LoggingLevel::Critical.tracing_level(), Level::ERROR);
    }
}
