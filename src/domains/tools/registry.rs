//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The closed set of tool names ([`ToolName`])
//! - The ordered list of tool descriptors advertised on `tools/list`
//! - Dispatch of tool calls, including the error boundary that turns Figma
//!   API failures into `isError` results

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, Tool},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, instrument, warn};

use crate::core::api::FigmaApi;

use super::definitions::common::api_error_result;
use super::definitions::{
    CreateWebhookTool, DeleteCommentTool, DeleteWebhookTool, GetComponentStylesTool,
    GetFileCommentsTool, GetFileComponentsTool, GetFileTool, GetFileVersionsTool,
    GetProjectFilesTool, GetTeamProjectsTool, GetWebhooksTool, PostCommentTool,
};
use super::{ToolError, ToolResult};

// ============================================================================
// Tool Names
// ============================================================================

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetFile,
    GetFileComments,
    PostComment,
    DeleteComment,
    GetTeamProjects,
    GetProjectFiles,
    GetFileComponents,
    GetComponentStyles,
    GetFileVersions,
    CreateWebhook,
    GetWebhooks,
    DeleteWebhook,
}

impl ToolName {
    /// All tools, in advertised order.
    pub const ALL: [ToolName; 12] = [
        Self::GetFile,
        Self::GetFileComments,
        Self::PostComment,
        Self::DeleteComment,
        Self::GetTeamProjects,
        Self::GetProjectFiles,
        Self::GetFileComponents,
        Self::GetComponentStyles,
        Self::GetFileVersions,
        Self::CreateWebhook,
        Self::GetWebhooks,
        Self::DeleteWebhook,
    ];

    /// Name as registered in MCP.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetFile => GetFileTool::NAME,
            Self::GetFileComments => GetFileCommentsTool::NAME,
            Self::PostComment => PostCommentTool::NAME,
            Self::DeleteComment => DeleteCommentTool::NAME,
            Self::GetTeamProjects => GetTeamProjectsTool::NAME,
            Self::GetProjectFiles => GetProjectFilesTool::NAME,
            Self::GetFileComponents => GetFileComponentsTool::NAME,
            Self::GetComponentStyles => GetComponentStylesTool::NAME,
            Self::GetFileVersions => GetFileVersionsTool::NAME,
            Self::CreateWebhook => CreateWebhookTool::NAME,
            Self::GetWebhooks => GetWebhooksTool::NAME,
            Self::DeleteWebhook => DeleteWebhookTool::NAME,
        }
    }

    /// Descriptor advertised to clients.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::GetFile => GetFileTool::to_tool(),
            Self::GetFileComments => GetFileCommentsTool::to_tool(),
            Self::PostComment => PostCommentTool::to_tool(),
            Self::DeleteComment => DeleteCommentTool::to_tool(),
            Self::GetTeamProjects => GetTeamProjectsTool::to_tool(),
            Self::GetProjectFiles => GetProjectFilesTool::to_tool(),
            Self::GetFileComponents => GetFileComponentsTool::to_tool(),
            Self::GetComponentStyles => GetComponentStylesTool::to_tool(),
            Self::GetFileVersions => GetFileVersionsTool::to_tool(),
            Self::CreateWebhook => CreateWebhookTool::to_tool(),
            Self::GetWebhooks => GetWebhooksTool::to_tool(),
            Self::DeleteWebhook => DeleteWebhookTool::to_tool(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::not_found(name))
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists tools and dispatches calls to them.
///
/// Holds the shared Figma API handle every tool call goes through.
pub struct ToolRegistry {
    api: Arc<dyn FigmaApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<dyn FigmaApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        ToolName::ALL.iter().map(|tool| tool.as_str()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        ToolName::ALL.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Call a tool by name.
    ///
    /// Unknown names, malformed arguments and internal failures are protocol
    /// faults (`Err`). Figma API failures come back as `Ok` results with
    /// `isError` set.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let tool: ToolName = name.parse().inspect_err(|e| warn!("{}", e))?;
        let arguments = Value::Object(arguments.unwrap_or_default());

        match self.dispatch(tool, arguments).await {
            Ok(result) => Ok(result),
            Err(ToolError::Api(e)) => {
                warn!("Figma API call for '{}' failed: {}", tool, e);
                Ok(api_error_result(&e))
            }
            Err(e @ ToolError::InvalidArguments(_)) => {
                warn!("Rejected arguments for '{}': {}", tool, e);
                Err(e.into())
            }
            Err(e) => {
                error!("Tool '{}' failed: {}", tool, e);
                Err(e.into())
            }
        }
    }

    async fn dispatch(&self, tool: ToolName, args: Value) -> ToolResult<CallToolResult> {
        let api = self.api.as_ref();
        match tool {
            ToolName::GetFile => GetFileTool::execute(&parse(args)?, api).await,
            ToolName::GetFileComments => GetFileCommentsTool::execute(&parse(args)?, api).await,
            ToolName::PostComment => PostCommentTool::execute(&parse(args)?, api).await,
            ToolName::DeleteComment => DeleteCommentTool::execute(&parse(args)?, api).await,
            ToolName::GetTeamProjects => GetTeamProjectsTool::execute(&parse(args)?, api).await,
            ToolName::GetProjectFiles => GetProjectFilesTool::execute(&parse(args)?, api).await,
            ToolName::GetFileComponents => GetFileComponentsTool::execute(&parse(args)?, api).await,
            ToolName::GetComponentStyles => {
                GetComponentStylesTool::execute(&parse(args)?, api).await
            }
            ToolName::GetFileVersions => GetFileVersionsTool::execute(&parse(args)?, api).await,
            ToolName::CreateWebhook => CreateWebhookTool::execute(&parse(args)?, api).await,
            ToolName::GetWebhooks => GetWebhooksTool::execute(&parse(args)?, api).await,
            ToolName::DeleteWebhook => DeleteWebhookTool::execute(&parse(args)?, api).await,
        }
    }
}

/// Deserialize tool arguments into the tool's parameter struct.
fn parse<P: DeserializeOwned>(arguments: Value) -> ToolResult<P> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
