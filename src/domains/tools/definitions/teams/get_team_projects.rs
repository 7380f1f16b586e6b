//! Get team projects tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get team projects tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTeamProjectsParams {
    /// The team ID
    pub team_id: String,
}

/// Get team projects tool.
pub struct GetTeamProjectsTool;

impl GetTeamProjectsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_team_projects";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get projects for a team";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(team_id = %params.team_id))]
    pub async fn execute(
        params: &GetTeamProjectsParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Listing projects of team '{}'", params.team_id);
        let projects = api
            .get(&format!("/teams/{}/projects", params.team_id))
            .await?;
        json_result(&projects)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetTeamProjectsParams>(Self::NAME, Self::DESCRIPTION)
    }
}
