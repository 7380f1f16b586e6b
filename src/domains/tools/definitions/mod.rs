//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by the Figma resource it
//! works on.

pub mod comments;
pub mod common;
pub mod files;
pub mod projects;
pub mod teams;
pub mod webhooks;

pub use comments::{
    DeleteCommentParams, DeleteCommentTool, GetFileCommentsParams, GetFileCommentsTool,
    PostCommentParams, PostCommentTool,
};
pub use files::{
    GetFileComponentsParams, GetFileComponentsTool, GetFileParams, GetFileTool,
    GetFileVersionsParams, GetFileVersionsTool,
};
pub use projects::{GetProjectFilesParams, GetProjectFilesTool};
pub use teams::{
    GetComponentStylesParams, GetComponentStylesTool, GetTeamProjectsParams, GetTeamProjectsTool,
};
pub use webhooks::{
    CreateWebhookParams, CreateWebhookTool, DeleteWebhookParams, DeleteWebhookTool,
    GetWebhooksParams, GetWebhooksTool,
};
