//! Get file comments tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get file comments tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileCommentsParams {
    /// The Figma file key
    pub file_key: String,
}

/// Get file comments tool - lists the comments left on a file.
pub struct GetFileCommentsTool;

impl GetFileCommentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_file_comments";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get comments from a Figma file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key))]
    pub async fn execute(
        params: &GetFileCommentsParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Fetching comments of file '{}'", params.file_key);
        let comments = api
            .get(&format!("/files/{}/comments", params.file_key))
            .await?;
        json_result(&comments)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetFileCommentsParams>(Self::NAME, Self::DESCRIPTION)
    }
}
