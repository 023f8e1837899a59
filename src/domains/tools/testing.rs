//! In-memory [`TasksApi`] used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::client::{ApiError, TasksApi};
use super::dispatcher::ResolvedRequest;

/// Records every request and answers with a canned response.
pub struct RecordingApi {
    status: StatusCode,
    body: Value,
    requests: Mutex<Vec<ResolvedRequest>>,
}

impl RecordingApi {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ResolvedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TasksApi for RecordingApi {
    async fn send(&self, request: &ResolvedRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.status.is_success() {
            Ok(self.body.clone())
        } else {
            Err(ApiError::from_response(
                self.status,
                &self.body,
                format!("Request failed with status code {}", self.status.as_u16()),
            ))
        }
    }
}
