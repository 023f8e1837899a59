//! Task tools.
//!
//! Operations on the tasks of one task list under `/lists/{tasklist}`.
//! Timestamps are RFC 3339 strings; boolean filters are passed as the
//! strings `"true"` / `"false"`.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::params::{TaskBodyParams, TaskListParams, TaskParams};
use crate::domains::tools::descriptor::ApiTool;
use crate::domains::tools::endpoint::{ApiMethod, Endpoint};

/// Parameters for `list-tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    /// Task list identifier.
    pub tasklist: String,

    /// Upper bound for a task's completion date (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_max: Option<String>,

    /// Lower bound for a task's completion date (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_min: Option<String>,

    /// Upper bound for a task's due date (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_max: Option<String>,

    /// Lower bound for a task's due date (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_min: Option<String>,

    /// Maximum number of tasks returned on one page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<String>,

    /// Token specifying the result page to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,

    /// Whether completed tasks are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_completed: Option<String>,

    /// Whether deleted tasks are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_deleted: Option<String>,

    /// Whether hidden tasks are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hidden: Option<String>,

    /// Whether tasks assigned from Docs or Chat are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_assigned: Option<String>,

    /// Lower bound for a task's last modification time (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_min: Option<String>,
}

/// Parameters for `insert-task`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertTaskParams {
    /// Task list identifier.
    pub tasklist: String,

    /// Parent task identifier; omitted creates a top-level task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Previous sibling task identifier; omitted places the task first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Task resource fields to send as the request body (e.g. `title`,
    /// `notes`, `due`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_data: Option<JsonObject>,
}

/// Parameters for `move-task`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskParams {
    /// Task list identifier.
    pub tasklist: String,

    /// Task identifier.
    pub task: String,

    /// New parent task identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// New previous sibling task identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Destination task list identifier, to move across lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tasklist: Option<String>,
}

pub struct ListTasksTool;

impl ApiTool for ListTasksTool {
    const NAME: &'static str = "list-tasks";
    const DESCRIPTION: &'static str = "List tasks";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Get, "/lists/{tasklist}/tasks");
    type Params = ListTasksParams;
}

pub struct InsertTaskTool;

impl ApiTool for InsertTaskTool {
    const NAME: &'static str = "insert-task";
    const DESCRIPTION: &'static str = "Create task";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Post, "/lists/{tasklist}/tasks");
    type Params = InsertTaskParams;
}

pub struct GetTaskTool;

impl ApiTool for GetTaskTool {
    const NAME: &'static str = "get-task";
    const DESCRIPTION: &'static str = "Get task";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Get, "/lists/{tasklist}/tasks/{task}");
    type Params = TaskParams;
}

pub struct UpdateTaskTool;

impl ApiTool for UpdateTaskTool {
    const NAME: &'static str = "update-task";
    const DESCRIPTION: &'static str = "Update task";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Put, "/lists/{tasklist}/tasks/{task}");
    type Params = TaskBodyParams;
}

pub struct PatchTaskTool;

impl ApiTool for PatchTaskTool {
    const NAME: &'static str = "patch-task";
    const DESCRIPTION: &'static str = "Patch task";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Patch, "/lists/{tasklist}/tasks/{task}");
    type Params = TaskBodyParams;
}

pub struct DeleteTaskTool;

impl ApiTool for DeleteTaskTool {
    const NAME: &'static str = "delete-task";
    const DESCRIPTION: &'static str = "Delete task";
    const ENDPOINT: Endpoint =
        Endpoint::new(ApiMethod::Delete, "/lists/{tasklist}/tasks/{task}");
    type Params = TaskParams;
}

/// Moves a task to another position, parent or list.
pub struct MoveTaskTool;

impl ApiTool for MoveTaskTool {
    const NAME: &'static str = "move-task";
    const DESCRIPTION: &'static str = "Move task";
    const ENDPOINT: Endpoint =
        Endpoint::new(ApiMethod::Post, "/lists/{tasklist}/tasks/{task}/move");
    type Params = MoveTaskParams;
}

/// Hides all completed tasks of a list.
pub struct ClearTasksTool;

impl ApiTool for ClearTasksTool {
    const NAME: &'static str = "clear-tasks";
    const DESCRIPTION: &'static str = "Clear completed tasks";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Post, "/lists/{tasklist}/clear");
    type Params = TaskListParams;
}
