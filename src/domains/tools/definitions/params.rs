//! Parameter structs shared by several tools.
//!
//! Field names serialize to the API's camelCase argument names. Absent
//! optional fields are skipped so they are never forwarded.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A task list identifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskListParams {
    /// Task list identifier.
    pub tasklist: String,
}

/// A task list identifier plus an optional task list resource.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskListBodyParams {
    /// Task list identifier.
    pub tasklist: String,

    /// TaskList resource fields to send as the request body (e.g. `title`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_data: Option<JsonObject>,
}

/// Only a request body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDataParams {
    /// Resource fields to send as the request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_data: Option<JsonObject>,
}

/// A task within a task list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskParams {
    /// Task list identifier.
    pub tasklist: String,

    /// Task identifier.
    pub task: String,
}

/// A task within a task list plus an optional task resource.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskBodyParams {
    /// Task list identifier.
    pub tasklist: String,

    /// Task identifier.
    pub task: String,

    /// Task resource fields to send as the request body (e.g. `title`,
    /// `notes`, `due`, `status`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_data: Option<JsonObject>,
}
