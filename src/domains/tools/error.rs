//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

use crate::core::api::ApiError;

/// Result type for tool execution.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Figma API call failed.
    #[error("Figma API error: {0}")]
    Api(#[from] ApiError),

    /// The tool result could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

/// Protocol faults. `Api` errors are expected to be turned into `isError`
/// results before they get here.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => {
                McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
            }
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_method_not_found() {
        let err: McpError = ToolError::not_found("nonexistent_tool").into();
        assert_eq!(err.code.0, ErrorCode::METHOD_NOT_FOUND.0);
        assert_eq!(err.message, "Unknown tool: nonexistent_tool");
    }

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err: McpError = ToolError::invalid_arguments("missing field `file_key`").into();
        assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(err.message.contains("file_key"));
    }
}
