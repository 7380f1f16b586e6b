//! Transport layer for the MCP server.
//!
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **HTTP**: HTTP server with JSON-RPC over POST requests - feature: `http`
//!
//! Both transports hand tool calls to the same registry, so the error
//! behaviour of a tool call does not depend on the transport.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
