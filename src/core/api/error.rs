//! Figma API client error types.

use thiserror::Error;

/// Result type for Figma API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by the Figma HTTP client.
///
/// Every variant is an upstream failure: the tools domain turns these into
/// `isError` results instead of protocol faults.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// The `message` field of the error body, when the API sent one.
        message: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The access token cannot be carried in an HTTP header.
    #[error("Access token contains characters that are not valid in an HTTP header")]
    InvalidToken,
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// The message reported to tool callers.
    ///
    /// Prefers the API's own `message` field and falls back to the local
    /// error text.
    pub fn upstream_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}
