//! Get project files tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get project files tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProjectFilesParams {
    /// The project ID
    pub project_id: String,
}

/// Get project files tool.
pub struct GetProjectFilesTool;

impl GetProjectFilesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_project_files";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get files in a project";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(project_id = %params.project_id))]
    pub async fn execute(
        params: &GetProjectFilesParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Listing files of project '{}'", params.project_id);
        let files = api
            .get(&format!("/projects/{}/files", params.project_id))
            .await?;
        json_result(&files)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetProjectFilesParams>(Self::NAME, Self::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use crate::domains::tools::definitions::common::test_support::required_fields;
    use serde_json::json;

    #[tokio::test]
    async fn test_project_id_passed_through_unchanged() {
        let api = RecordingApi::replying(json!({"files": []}));
        let params = GetProjectFilesParams {
            project_id: "12345".to_string(),
        };

        GetProjectFilesTool::execute(&params, &api).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![RecordedCall::get("/projects/12345/files")]
        );
    }

    #[test]
    fn test_schema_requires_project_id() {
        assert_eq!(
            required_fields(&GetProjectFilesTool::to_tool()),
            vec!["project_id"]
        );
    }
}
