//! Tools domain module.
//!
//! Every tool maps one MCP call onto one Figma REST request.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool listing and dispatch, shared by all transports
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<resource>/` with its params struct,
//!    `execute()` and `to_tool()`
//! 2. Export it in the resource `mod.rs` and in `definitions/mod.rs`
//! 3. Add a `ToolName` variant and its arms in `registry.rs`
//!
//! **No need to modify `server.rs`!**

pub mod definitions;
mod error;
mod registry;

pub use error::{ToolError, ToolResult};
pub use registry::{ToolName, ToolRegistry};
