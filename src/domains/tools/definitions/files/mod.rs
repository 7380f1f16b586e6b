//! File tools module.
//!
//! Read-only tools working on a single Figma file:
//! - `get_file`: The file document
//! - `get_file_components`: Published components of the file
//! - `get_file_versions`: Version history

pub mod get_file;
pub mod get_file_components;
pub mod get_file_versions;

pub use get_file::{GetFileParams, GetFileTool};
pub use get_file_components::{GetFileComponentsParams, GetFileComponentsTool};
pub use get_file_versions::{GetFileVersionsParams, GetFileVersionsTool};
