//! Project tools module.

pub mod get_project_files;

pub use get_project_files::{GetProjectFilesParams, GetProjectFilesTool};
