//! Task list tools.
//!
//! CRUD over the caller's task lists under `/users/@me/lists`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::params::{RequestDataParams, TaskListBodyParams, TaskListParams};
use crate::domains::tools::descriptor::ApiTool;
use crate::domains::tools::endpoint::{ApiMethod, Endpoint};

/// Parameters for `list-task-lists`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskListsParams {
    /// Maximum number of task lists returned on one page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<String>,

    /// Token specifying the result page to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Lists the authenticated user's task lists.
pub struct ListTaskListsTool;

impl ApiTool for ListTaskListsTool {
    const NAME: &'static str = "list-task-lists";
    const DESCRIPTION: &'static str = "List task lists";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Get, "/users/@me/lists");
    type Params = ListTaskListsParams;
}

/// Creates a task list.
pub struct InsertTaskListTool;

impl ApiTool for InsertTaskListTool {
    const NAME: &'static str = "insert-task-list";
    const DESCRIPTION: &'static str = "Create task list";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Post, "/users/@me/lists");
    type Params = RequestDataParams;
}

pub struct GetTaskListTool;

impl ApiTool for GetTaskListTool {
    const NAME: &'static str = "get-task-list";
    const DESCRIPTION: &'static str = "Get task list";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Get, "/users/@me/lists/{tasklist}");
    type Params = TaskListParams;
}

/// Replaces a task list.
pub struct UpdateTaskListTool;

impl ApiTool for UpdateTaskListTool {
    const NAME: &'static str = "update-task-list";
    const DESCRIPTION: &'static str = "Update task list";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Put, "/users/@me/lists/{tasklist}");
    type Params = TaskListBodyParams;
}

/// Updates only the supplied fields of a task list.
pub struct PatchTaskListTool;

impl ApiTool for PatchTaskListTool {
    const NAME: &'static str = "patch-task-list";
    const DESCRIPTION: &'static str = "Patch task list";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Patch, "/users/@me/lists/{tasklist}");
    type Params = TaskListBodyParams;
}

pub struct DeleteTaskListTool;

impl ApiTool for DeleteTaskListTool {
    const NAME: &'static str = "delete-task-list";
    const DESCRIPTION: &'static str = "Delete task list";
    const ENDPOINT: Endpoint = Endpoint::new(ApiMethod::Delete, "/users/@me/lists/{tasklist}");
    type Params = TaskListParams;
}
