//! Get webhooks tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the get webhooks tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWebhooksParams {
    /// The team ID
    pub team_id: String,
}

/// Get webhooks tool - lists the webhooks registered for a team.
pub struct GetWebhooksTool;

impl GetWebhooksTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_webhooks";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List webhooks";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(team_id = %params.team_id))]
    pub async fn execute(
        params: &GetWebhooksParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Listing webhooks of team '{}'", params.team_id);
        let webhooks = api
            .get(&format!("/teams/{}/webhooks", params.team_id))
            .await?;
        json_result(&webhooks)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<GetWebhooksParams>(Self::NAME, Self::DESCRIPTION)
    }
}
