//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Listing and dispatch live in `domains/tools/registry.rs`, shared by the
//! STDIO handler below and the HTTP transport.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::api::{FigmaApi, FigmaClient};
use super::config::Config;
use super::error::Result;
use crate::domains::tools::ToolRegistry;

/// Instructions advertised to clients on initialize.
pub const INSTRUCTIONS: &str = "Figma MCP server. Tools read files, components, styles, \
    version history, team projects and project files, manage file comments, and manage \
    team webhooks through the Figma REST API. File keys come from Figma file URLs.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: configuration and registry are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool listing and dispatch.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server talking to the Figma API described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = FigmaClient::new(&config.figma)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server on top of an existing Figma API handle.
    pub fn with_api(config: Config, api: Arc<dyn FigmaApi>) -> Self {
        Self {
            config: Arc::new(config),
            tools: Arc::new(ToolRegistry::new(api)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.tools.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.tools.call_tool(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::RecordingApi;
    use serde_json::json;

    fn test_server(api: RecordingApi) -> McpServer {
        McpServer::with_api(Config::default(), Arc::new(api))
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = test_server(RecordingApi::replying(json!({})));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(info.server_info.name, "figma-mcp");
        assert!(info.instructions.unwrap().contains("Figma"));
    }

    #[test]
    fn test_list_tools_json_shape() {
        let server = test_server(RecordingApi::replying(json!({})));
        let tools = server.list_tools();
        assert_eq!(tools.len(), 12);
        assert_eq!(tools[0]["name"], "get_file");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["file_key"]));
    }

    #[tokio::test]
    async fn test_call_tool_delegates_to_registry() {
        let server = test_server(RecordingApi::replying(json!({"name": "demo"})));
        let arguments = json!({"file_key": "ABC123"}).as_object().cloned();

        let result = server.call_tool("get_file", arguments).await.unwrap();

        assert_eq!(result.is_error, Some(false));
    }
}
