//! Error types and handling for the MCP server.
//!
//! Startup and wiring failures. Errors raised while serving a tool call are
//! handled in the tools domain and never reach this type.

use thiserror::Error;

use super::api::ApiError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Figma API client could not be built.
    #[error("Figma API client error: {0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// Create a configuration error for a required variable that is unset.
    pub fn missing_var(name: &str) -> Self {
        Self::Config(format!("{name} environment variable is required"))
    }
}
