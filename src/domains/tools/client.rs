//! Google Tasks REST client.
//!
//! [`TasksApi`] is the seam between the dispatcher and the network: the
//! server holds one `Arc<dyn TasksApi>` and hands it to every route. The
//! production implementation, [`TasksClient`], wraps a single pooled
//! `reqwest::Client` and carries no per-call state.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::dispatcher::ResolvedRequest;
use crate::core::config::ApiConfig;

/// Failure of an outbound API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// The request never produced a response (connect, timeout, decode).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build a status error, preferring the message carried in the body.
    pub fn from_response(status: StatusCode, body: &Value, fallback: impl Into<String>) -> Self {
        let message = body_message(body)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.into());
        Self::Status { status, message }
    }

    /// HTTP status of the failed call, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
        }
    }
}

/// Error text from a response body: a top-level `message`, or Google's
/// `{"error": {"message": ...}}` shape.
pub fn body_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.pointer("/error/message").and_then(Value::as_str))
        .filter(|m| !m.is_empty())
}

/// Decode a response body. Empty bodies become `""` and non-JSON bodies
/// become a JSON string of the raw text.
pub fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Transport used by the dispatcher to execute a resolved request.
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// Issue the request and return the decoded 2xx body.
    async fn send(&self, request: &ResolvedRequest) -> Result<Value, ApiError>;
}

/// reqwest-backed Google Tasks client.
#[derive(Debug, Clone)]
pub struct TasksClient {
    http: reqwest::Client,
    base_url: String,
}

impl TasksClient {
    /// Build a client with `Accept: application/json` and the configured timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for a rendered API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TasksApi for TasksClient {
    async fn send(&self, request: &ResolvedRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.into(), &url);
        builder = if request.method.sends_query() {
            builder.query(&request.query_pairs())
        } else {
            builder.json(&request.payload)
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let client_message = response.error_for_status_ref().err().map(|e| e.to_string());
        let body = parse_body(&response.bytes().await?);

        if status.is_success() {
            Ok(body)
        } else {
            let fallback = client_message
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            Err(ApiError::from_response(status, &body, fallback))
        }
    }
}
