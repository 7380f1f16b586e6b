//! Get file versions tool definition.
//!
//! Returns the version history of a file as reported by Figma.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get file versions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileVersionsParams {
    /// The Figma file key
    pub file_key: String,
}

/// Get file versions tool.
pub struct GetFileVersionsTool;

impl GetFileVersionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_file_versions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get version history of a file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key))]
    pub async fn execute(
        params: &GetFileVersionsParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Fetching version history of file '{}'", params.file_key);
        let versions = api
            .get(&format!("/files/{}/versions", params.file_key))
            .await?;
        json_result(&versions)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetFileVersionsParams>(Self::NAME, Self::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use crate::domains::tools::definitions::common::test_support::text_of;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_file_versions_keeps_upstream_order() {
        let api = RecordingApi::replying(json!({
            "versions": [
                {"id": "2", "label": "Second"},
                {"id": "1", "label": "First"}
            ]
        }));
        let params = GetFileVersionsParams {
            file_key: "KEY".to_string(),
        };

        let result = GetFileVersionsTool::execute(&params, &api).await.unwrap();

        assert_eq!(api.calls(), vec![RecordedCall::get("/files/KEY/versions")]);
        let text = text_of(&result);
        assert!(text.find("Second").unwrap() < text.find("First").unwrap());
    }
}
