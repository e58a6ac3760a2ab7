//! Transport service - orchestrates different transport types.
//!
//! This service provides a unified interface for starting the MCP server
//! with different transport mechanisms.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::server::ServerFactory;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the transport, composing servers with `factory`.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, factory: ServerFactory) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            TransportConfig::Stdio => run_stdio(factory).await,
            TransportConfig::Http(cfg) => run_http(cfg, factory).await,
        }
    }
}

#[cfg(feature = "stdio")]
async fn run_stdio(factory: ServerFactory) -> TransportResult<()> {
    let server = factory.create(None);
    super::stdio::StdioTransport::run(server).await
}

#[cfg(not(feature = "stdio"))]
async fn run_stdio(_factory: ServerFactory) -> TransportResult<()> {
    Err(super::TransportError::Unsupported("stdio"))
}

#[cfg(feature = "http")]
async fn run_http(config: super::HttpConfig, factory: ServerFactory) -> TransportResult<()> {
    super::http::HttpTransport::new(config).run(factory).await
}

#[cfg(not(feature = "http"))]
async fn run_http(_config: super::HttpConfig, _factory: ServerFactory) -> TransportResult<()> {
    Err(super::TransportError::Unsupported("http"))
}
