//! Figma REST client.
//!
//! A single async `reqwest` client bound to the API base URL. The access token
//! is installed as a default header, so every request carries it.

use async_trait::async_trait;
use reqwest::{
    Method,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ApiError, ApiResult, FigmaApi};
use crate::core::config::FigmaConfig;

/// Header carrying the personal access token.
pub const FIGMA_TOKEN_HEADER: &str = "x-figma-token";

/// Production Figma REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Figma REST API.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
}

impl FigmaClient {
    /// Build a client from configuration.
    pub fn new(config: &FigmaConfig) -> ApiResult<Self> {
        let mut token =
            HeaderValue::from_str(&config.access_token).map_err(|_| ApiError::InvalidToken)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(FIGMA_TOKEN_HEADER), token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self, body), fields(method = %method))]
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Figma responded {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), error_message(&text)));
        }

        Ok(parse_body(text))
    }
}

#[async_trait]
impl FigmaApi for FigmaClient {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::DELETE, path, None).await
    }
}

/// Decode a success body. Non-JSON bodies are kept as a JSON string.
fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
}

/// Extract the `message` field of an error body, if any.
fn error_message(text: &str) -> Option<String> {
    let body: Value = serde_json::from_str(text).ok()?;
    match body.get("message")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str, base_url: &str) -> FigmaConfig {
        FigmaConfig {
            access_token: token.to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = FigmaClient::new(&config("token", "https://api.figma.com/v1/")).unwrap();
        assert_eq!(client.base_url(), "https://api.figma.com/v1");
        assert_eq!(
            client.url("/files/ABC"),
            "https://api.figma.com/v1/files/ABC"
        );
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let result = FigmaClient::new(&config("bad\ntoken", DEFAULT_BASE_URL));
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"status":404,"message":"Not found"}"#).as_deref(),
            Some("Not found")
        );
        assert_eq!(
            error_message(r#"{"status":403,"err":"Invalid token"}"#),
            None
        );
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"message":null}"#), None);
        assert_eq!(error_message(r#"{"message":42}"#).as_deref(), Some("42"));
    }

    #[test]
    fn test_parse_body_keeps_non_json_text() {
        assert_eq!(
            parse_body(r#"{"a":1}"#.to_string()),
            serde_json::json!({"a": 1})
        );
        assert_eq!(
            parse_body("plain".to_string()),
            Value::String("plain".to_string())
        );
        assert_eq!(parse_body(String::new()), Value::String(String::new()));
    }
}
