//! Get file tool definition.
//!
//! Fetches the full document of a Figma file.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileParams {
    /// The Figma file key
    pub file_key: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get file tool - returns the file document as JSON.
pub struct GetFileTool;

impl GetFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about a Figma file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key))]
    pub async fn execute(params: &GetFileParams, api: &dyn FigmaApi) -> ToolResult<CallToolResult> {
        info!("Fetching file '{}'", params.file_key);
        let file = api.get(&format!("/files/{}", params.file_key)).await?;
        json_result(&file)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetFileParams>(Self::NAME, Self::DESCRIPTION)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use crate::domains::tools::ToolError;
    use crate::domains::tools::definitions::common::test_support::{required_fields, text_of};
    use serde_json::json;

    fn params(file_key: &str) -> GetFileParams {
        GetFileParams {
            file_key: file_key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_file_pretty_prints_response() {
        let api = RecordingApi::replying(json!({"name": "demo"}));

        let result = GetFileTool::execute(&params("ABC123"), &api).await.unwrap();

        assert_eq!(api.calls(), vec![RecordedCall::get("/files/ABC123")]);
        assert_eq!(text_of(&result), "{\n  \"name\": \"demo\"\n}");
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_get_file_does_not_truncate_large_documents() {
        let pages: Vec<_> = (0..500)
            .map(|i| json!({"id": format!("0:{i}"), "type": "CANVAS"}))
            .collect();
        let api = RecordingApi::replying(json!({"document": {"children": pages}}));

        let result = GetFileTool::execute(&params("BIG"), &api).await.unwrap();

        let text = text_of(&result);
        assert!(text.contains("\"0:0\""));
        assert!(text.contains("\"0:499\""));
    }

    #[tokio::test]
    async fn test_get_file_leaves_api_errors_to_dispatcher() {
        let api = RecordingApi::failing(404, Some("Not found"));

        let err = GetFileTool::execute(&params("missing"), &api)
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Api(_)));
    }

    #[test]
    fn test_schema_requires_file_key() {
        assert_eq!(required_fields(&GetFileTool::to_tool()), vec!["file_key"]);
    }
}
