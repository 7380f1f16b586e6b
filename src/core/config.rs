//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) on top of defaults.

use super::api::DEFAULT_BASE_URL;
use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the Figma personal access token.
pub const ACCESS_TOKEN_VAR: &str = "FIGMA_ACCESS_TOKEN";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Figma API access.
    pub figma: FigmaConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Figma API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct FigmaConfig {
    /// Personal access token sent as `X-Figma-Token`.
    pub access_token: String,

    /// REST API base URL, without a trailing slash.
    pub base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for FigmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigmaConfig")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "figma-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            figma: FigmaConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `FIGMA_ACCESS_TOKEN` is mandatory; the server must not start without
    /// it. Everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.figma.access_token = std::env::var(ACCESS_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::missing_var(ACCESS_TOKEN_VAR))?;

        if let Ok(base_url) = std::env::var("FIGMA_API_BASE_URL") {
            info!("Using Figma API base URL {}", base_url);
            config.figma.base_url = base_url;
        }

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_access_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(ACCESS_TOKEN_VAR, "figd_test_token");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.figma.access_token, "figd_test_token");
        unsafe {
            std::env::remove_var(ACCESS_TOKEN_VAR);
        }
    }

    #[test]
    fn test_missing_access_token_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(ACCESS_TOKEN_VAR);
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(ACCESS_TOKEN_VAR));
    }

    #[test]
    fn test_blank_access_token_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(ACCESS_TOKEN_VAR, "   ");
        }
        let result = Config::from_env();
        unsafe {
            std::env::remove_var(ACCESS_TOKEN_VAR);
        }
        assert!(result.is_err());
    }

    #[test]
    fn test_access_token_redacted_in_debug() {
        let figma = FigmaConfig {
            access_token: "super_secret_token".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let debug_str = format!("{:?}", figma);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_default_targets_figma_v1() {
        let config = Config::default();
        assert_eq!(config.figma.base_url, "https://api.figma.com/v1");
        assert_eq!(config.server.name, "figma-mcp");
    }
}
