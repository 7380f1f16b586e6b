//! Get file components tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get file components tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileComponentsParams {
    /// The Figma file key
    pub file_key: String,
}

/// Get file components tool - lists published components of a file.
pub struct GetFileComponentsTool;

impl GetFileComponentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_file_components";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get components in a file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_key = %params.file_key))]
    pub async fn execute(
        params: &GetFileComponentsParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Fetching components of file '{}'", params.file_key);
        let components = api
            .get(&format!("/files/{}/components", params.file_key))
            .await?;
        json_result(&components)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetFileComponentsParams>(Self::NAME, Self::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use crate::domains::tools::definitions::common::test_support::text_of;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_file_components_path() {
        let api = RecordingApi::replying(json!({"meta": {"components": []}}));
        let params = GetFileComponentsParams {
            file_key: "F1".to_string(),
        };

        let result = GetFileComponentsTool::execute(&params, &api).await.unwrap();

        assert_eq!(api.calls(), vec![RecordedCall::get("/files/F1/components")]);
        assert!(text_of(&result).contains("\"components\": []"));
    }
}
