//! Command line flags.
//!
//! Every flag is optional and backed by an environment variable; the
//! fallback happens in [`Config::resolve`](super::Config::resolve), not here,
//! so values stay raw strings until validation.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use tracing::debug;

/// Raw command line options.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "brave-search-mcp-server", version)]
#[command(about = "MCP server exposing the Brave Search API as tools", long_about = None)]
pub struct CliArgs {
    /// Brave API key [env: BRAVE_API_KEY]
    #[arg(long, value_name = "STRING")]
    pub brave_api_key: Option<String>,

    /// Logging level [env: BRAVE_MCP_LOG_LEVEL] [default: info]
    #[arg(long, value_name = "STRING")]
    pub logging_level: Option<String>,

    /// Transport type [env: BRAVE_MCP_TRANSPORT] [default: stdio]
    #[arg(long, value_name = "stdio|http")]
    pub transport: Option<String>,

    /// Tools to enable [env: BRAVE_MCP_ENABLED_TOOLS, space separated]
    #[arg(long, value_name = "NAMES", num_args = 1..)]
    pub enabled_tools: Option<Vec<String>>,

    /// Tools to disable [env: BRAVE_MCP_DISABLED_TOOLS, space separated]
    #[arg(long, value_name = "NAMES", num_args = 1..)]
    pub disabled_tools: Option<Vec<String>>,

    /// Port for the HTTP transport [env: BRAVE_MCP_PORT] [default: 8080]
    #[arg(long, value_name = "NUMBER")]
    pub port: Option<String>,

    /// Host for the HTTP transport [env: BRAVE_MCP_HOST] [default: 0.0.0.0]
    #[arg(long, value_name = "STRING")]
    pub host: Option<String>,

    /// Whether the HTTP transport is stateless [env: BRAVE_MCP_STATELESS]
    #[arg(long, value_name = "BOOLEAN")]
    pub stateless: Option<String>,
}

impl CliArgs {
    /// Parse the given arguments, ignoring options this server does not know.
    ///
    /// Hosting wrappers may pass extra flags; those and their values are
    /// dropped before clap sees them. Exits on `--help`, `--version` or a
    /// malformed known flag.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(Self::filter_known_args(args))
    }

    /// Drop unknown options and the values that follow them.
    ///
    /// The first argument is the program name and is always kept.
    pub fn filter_known_args<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut command = Self::command();
        command.build();

        // (long, short, max values) for every known option
        let known: Vec<(Option<String>, Option<char>, usize)> = command
            .get_arguments()
            .map(|arg| {
                (
                    arg.get_long().map(String::from),
                    arg.get_short(),
                    arg.get_num_args().map(|r| r.max_values()).unwrap_or(1),
                )
            })
            .collect();

        let mut args = args.into_iter().map(Into::into);
        let mut filtered: Vec<OsString> = args.next().into_iter().collect();
        let mut remaining_values = 0usize;

        for arg in args {
            let text = arg.to_string_lossy().into_owned();

            let option = if let Some(flag) = text.strip_prefix("--") {
                let (name, inline_value) = match flag.split_once('=') {
                    Some((name, _)) => (name, true),
                    None => (flag, false),
                };
                Some((
                    known.iter().find(|(long, _, _)| long.as_deref() == Some(name)),
                    inline_value,
                ))
            } else if text.len() == 2 && text.starts_with('-') {
                let short = text.chars().nth(1);
                Some((known.iter().find(|(_, s, _)| *s == short), false))
            } else {
                None
            };

            match option {
                Some((Some((_, _, max_values)), inline_value)) => {
                    remaining_values = if inline_value { 0 } else { *max_values };
                    filtered.push(arg);
                }
                Some((None, _)) => {
                    debug!("Ignoring unknown option: {}", text);
                    remaining_values = 0;
                }
                None if remaining_values > 0 => {
                    remaining_values -= 1;
                    filtered.push(arg);
                }
                None => debug!("Ignoring stray argument: {}", text),
            }
        }

        filtered
    }
}
