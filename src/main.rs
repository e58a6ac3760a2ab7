//! MCP Server Entry Point
//!
//! Resolves configuration, initializes logging, composes the server and
//! starts the configured transport.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use brave_search_mcp_server::core::config::LoggingLevel;
use brave_search_mcp_server::core::{Config, ServerFactory, TransportService};
use brave_search_mcp_server::domains::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let registry = ToolRegistry::build();

    let config = match Config::from_process(&registry) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let factory = ServerFactory::new(config, registry)?;

    let server = factory.create(None);
    info!("Server initialized with tools: {}", server.registered_tools().join(", "));

    if let Err(e) = transport.run(factory).await {
        error!("Transport failed: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the stdio transport.
fn init_logging(level: LoggingLevel) {
    let filter = EnvFilter::from_default_env().add_directive(level.tracing_level().into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
