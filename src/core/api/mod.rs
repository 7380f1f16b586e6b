//! Figma REST API access.
//!
//! Tools talk to Figma through the [`FigmaApi`] trait. [`FigmaClient`] is the
//! production implementation; it is built once at startup and shared.

mod client;
mod error;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DEFAULT_BASE_URL, FIGMA_TOKEN_HEADER, FigmaClient};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use serde_json::Value;

/// One HTTP call against the Figma API.
///
/// `path` is relative to the API base URL and starts with `/`. Successful
/// calls yield the decoded response body.
#[async_trait]
pub trait FigmaApi: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, path: &str) -> ApiResult<Value>;

    /// Issue a POST request with a JSON body.
    async fn post(&self, path: &str, body: Value) -> ApiResult<Value>;

    /// Issue a DELETE request.
    async fn delete(&self, path: &str) -> ApiResult<Value>;
}
