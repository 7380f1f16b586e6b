//! Figma MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the Figma API client and
//! serves MCP over the configured transport until the client goes away or the
//! process is interrupted.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use figma_mcp_server::core::config::LoggingConfig;
use figma_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing access token stops the process here, before any transport
    // is started.
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server =
        McpServer::new(config.clone()).context("Failed to initialize the Figma API client")?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    tokio::select! {
        result = transport.run(server) => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupt received"),
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
