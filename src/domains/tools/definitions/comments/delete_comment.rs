//! Delete comment tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, text_result};

/// Parameters for the delete comment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    /// The Figma file key
    pub file_key: String,

    /// The comment ID
    pub comment_id: String,
}

/// Delete comment tool - removes a comment and reports a fixed confirmation.
pub struct DeleteCommentTool;

impl DeleteCommentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_comment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a comment from a Figma file";

    /// Text returned once Figma accepted the deletion.
    pub const CONFIRMATION: &'static str = "Comment deleted successfully";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key, comment_id = %params.comment_id))]
    pub async fn execute(
        params: &DeleteCommentParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!(
            "Deleting comment '{}' from file '{}'",
            params.comment_id, params.file_key
        );
        let path = format!("/files/{}/comments/{}", params.file_key, params.comment_id);
        api.delete(&path).await?;
        Ok(text_result(Self::CONFIRMATION))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<DeleteCommentParams>(Self::NAME, Self::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use crate::domains::tools::definitions::common::test_support::{required_fields, text_of};
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_comment_ignores_response_body() {
        let api = RecordingApi::replying(json!({"status": 200, "error": false}));
        let params = DeleteCommentParams {
            file_key: "F".to_string(),
            comment_id: "C9".to_string(),
        };

        let result = DeleteCommentTool::execute(&params, &api).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![RecordedCall::delete("/files/F/comments/C9")]
        );
        assert_eq!(text_of(&result), "Comment deleted successfully");
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_schema_requires_file_key_and_comment_id() {
        assert_eq!(
            required_fields(&DeleteCommentTool::to_tool()),
            vec!["comment_id", "file_key"]
        );
    }
}
