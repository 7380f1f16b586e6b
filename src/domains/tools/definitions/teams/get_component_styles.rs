//! Get component styles tool definition.
//!
//! Lists the styles a team has published to its library.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get component styles tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetComponentStylesParams {
    /// The team ID
    pub team_id: String,
}

/// Get component styles tool.
pub struct GetComponentStylesTool;

impl GetComponentStylesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_component_styles";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get published styles";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(team_id = %params.team_id))]
    pub async fn execute(
        params: &GetComponentStylesParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Listing published styles of team '{}'", params.team_id);
        let styles = api.get(&format!("/teams/{}/styles", params.team_id)).await?;
        json_result(&styles)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetComponentStylesParams>(Self::NAME, Self::DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::{RecordedCall, RecordingApi};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_component_styles_uses_team_path() {
        let api = RecordingApi::replying(json!({"meta": {"styles": []}}));
        let params = GetComponentStylesParams {
            team_id: "T1".to_string(),
        };

        GetComponentStylesTool::execute(&params, &api)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec![RecordedCall::get("/teams/T1/styles")]);
    }
}
