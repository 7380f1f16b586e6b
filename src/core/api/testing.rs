//! In-memory `FigmaApi` that records every call.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, ApiResult, FigmaApi};

/// A call observed by [`RecordingApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

impl RecordedCall {
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            body: None,
        }
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self {
            method: "POST",
            path: path.to_string(),
            body: Some(body),
        }
    }

    pub fn delete(path: &str) -> Self {
        Self {
            method: "DELETE",
            path: path.to_string(),
            body: None,
        }
    }
}

enum Reply {
    Body(Value),
    Status(u16, Option<String>),
}

/// Fake API answering every call with the same reply.
pub struct RecordingApi {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Reply,
}

impl RecordingApi {
    /// Answer every call with `body`.
    pub fn replying(body: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Body(body),
        }
    }

    /// Fail every call with the given status and optional remote message.
    pub fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Status(status, message.map(str::to_string)),
        }
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, message) => Err(ApiError::status(*status, message.clone())),
        }
    }
}

#[async_trait]
impl FigmaApi for RecordingApi {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.record(RecordedCall::get(path))
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.record(RecordedCall::post(path, body))
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.record(RecordedCall::delete(path))
    }
}
