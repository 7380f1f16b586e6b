//! Delete webhook tool definition.

use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::api::FigmaApi;
use crate::domains::tools::ToolResult;
use crate::domains::tools::definitions::common::{descriptor, text_result};

/// Parameters for the delete webhook tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteWebhookParams {
    /// The webhook ID
    pub webhook_id: String,
}

/// Delete webhook tool.
pub struct DeleteWebhookTool;

impl DeleteWebhookTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_webhook";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a webhook";

    /// Text returned once Figma accepted the deletion.
    pub const CONFIRMATION: &'static str = "Webhook deleted successfully";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(webhook_id = %params.webhook_id))]
    pub async fn execute(
        params: &DeleteWebhookParams,
        api: &dyn FigmaApi,
    ) -> ToolResult<CallToolResult> {
        info!("Deleting webhook '{}'", params.webhook_id);
        api.delete(&format!("/webhooks/{}", params.webhook_id))
            .await?;
        Ok(text_result(Self::CONFIRMATION))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor::<DeleteWebhookParams>(Self::NAME, Self::DESCRIPTION)
    }
}
