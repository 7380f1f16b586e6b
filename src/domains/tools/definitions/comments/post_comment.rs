//! Post comment tool definition.
//!
//! Adds a top-level comment to a file. Only the message is sent; comment
//! placement (`client_meta`) is left to Figma's default.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the post comment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostCommentParams {
    /// The Figma file key
    pub file_key: String,

    /// The comment message
    pub message: String,
}

/// Post comment tool.
pub struct PostCommentTool;

impl PostCommentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "post_comment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Post a comment to a Figma file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key))]
    pub async fn execute(
        params: &PostCommentParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Posting comment to file '{}'", params.file_key);
        let comment = api
            .post(
                &format!("/files/{}/comments", params.file_key),
                json!({ "message": params.message }),
            )
            .await?;
        json_result(&comment)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<PostCommentParams>(Self::NAME, Self::DESCRIPTION)
    }
}
