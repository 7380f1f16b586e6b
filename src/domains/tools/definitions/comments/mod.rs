//! Comment tools module.
//!
//! - `get_file_comments`: List comments on a file
//! - `post_comment`: Add a comment
//! - `delete_comment`: Remove a comment

pub mod delete_comment;
pub mod get_file_comments;
pub mod post_comment;

pub use delete_comment::{DeleteCommentParams, DeleteCommentTool};
pub use get_file_comments::{GetFileCommentsParams, GetFileCommentsTool};
pub use post_comment::{PostCommentParams, PostCommentTool};
