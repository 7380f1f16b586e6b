//! Create webhook tool definition.
//!
//! Registers a team webhook. Figma validates the event type and callback URL;
//! nothing is checked locally.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, json_result};

/// Parameters for the create webhook tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWebhookParams {
    /// The team ID
    pub team_id: String,

    /// The event type to listen for
    pub event_type: String,

    /// The callback URL
    pub callback_url: String,
}

/// Create webhook tool.
pub struct CreateWebhookTool;

impl CreateWebhookTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_webhook";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a webhook";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(team_id = %params.team_id, event_type = %params.event_type))]
    pub async fn execute(
        params: &CreateWebhookParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!(
            "Creating {} webhook for team '{}'",
            params.event_type, params.team_id
        );
        let body = json!({
            "event_type": params.event_type,
            "callback_url": params.callback_url,
        });
        let webhook = api
            .post(&format!("/teams/{}/webhooks", params.team_id), body)
            .await?;
        json_result(&webhook)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<CreateWebhookParams>(Self::NAME, Self::DESCRIPTION)
    }
}
