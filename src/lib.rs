//! Figma MCP Server Library
//!
//! This crate exposes the Figma REST API (files, comments, projects,
//! components, styles, version history, webhooks) as Model Context Protocol
//! tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the Figma HTTP client, the MCP
//!   server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One tool per Figma endpoint, plus the registry that lists
//!     and dispatches them
//!
//! # Example
//!
//! ```rust,no_run
//! use figma_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
