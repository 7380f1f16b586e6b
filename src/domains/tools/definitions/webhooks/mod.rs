//! Webhook tools module.
//!
//! - `create_webhook`: Register a team webhook
//! - `get_webhooks`: List team webhooks
//! - `delete_webhook`: Remove a webhook by ID

pub mod create_webhook;
pub mod delete_webhook;
pub mod get_webhooks;

pub use create_webhook::{CreateWebhookParams, CreateWebhookTool};
pub use delete_webhook::{DeleteWebhookParams, DeleteWebhookTool};
pub use get_webhooks::{GetWebhooksParams, GetWebhooksTool};
