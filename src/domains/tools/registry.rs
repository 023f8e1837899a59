//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The table of all available tools
//! - Name-based dispatch for tool calls (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use super::client::TasksApi;
use super::definitions::{
    ClearTasksTool, DeleteTaskListTool, DeleteTaskTool, GetTaskListTool, GetTaskTool,
    InsertTaskListTool, InsertTaskTool, ListTaskListsTool, ListTasksTool, MoveTaskTool,
    PatchTaskListTool, PatchTaskTool, UpdateTaskListTool, UpdateTaskTool,
};
use super::descriptor::ToolDescriptor;
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    api: Arc<dyn TasksApi>,
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a new tool registry dispatching through `api`.
    pub fn new(api: Arc<dyn TasksApi>) -> Self {
        Self {
            api,
            tools: Self::descriptors(),
        }
    }

    /// The tool table. This is the single source of truth for all tools;
    /// the rmcp router is built from it as well.
    pub fn descriptors() -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor::of::<ListTaskListsTool>(),
            ToolDescriptor::of::<InsertTaskListTool>(),
            ToolDescriptor::of::<GetTaskListTool>(),
            ToolDescriptor::of::<UpdateTaskListTool>(),
            ToolDescriptor::of::<PatchTaskListTool>(),
            ToolDescriptor::of::<DeleteTaskListTool>(),
            ToolDescriptor::of::<ListTasksTool>(),
            ToolDescriptor::of::<InsertTaskTool>(),
            ToolDescriptor::of::<GetTaskTool>(),
            ToolDescriptor::of::<UpdateTaskTool>(),
            ToolDescriptor::of::<PatchTaskTool>(),
            ToolDescriptor::of::<DeleteTaskTool>(),
            ToolDescriptor::of::<MoveTaskTool>(),
            ToolDescriptor::of::<ClearTasksTool>(),
        ]
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        Self::descriptors().iter().map(ToolDescriptor::to_tool).collect()
    }

    /// Look up a tool by name.
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Dispatch a tool call by name.
    ///
    /// `Err` means the call never reached the API: unknown tool or arguments
    /// that fail the schema. Everything past validation is an envelope.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
        authorization: Option<&str>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(tool) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        tool.invoke(self.api.as_ref(), arguments, authorization).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::ApiMethod;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;
    use std::collections::HashSet;

    fn registry(api: &Arc<RecordingApi>) -> ToolRegistry {
        ToolRegistry::new(api.clone())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(Arc::new(RecordingApi::ok(json!({}))));
        let names = registry.tool_names();
        assert_eq!(names.len(), 14);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());

        for name in [
            "list-task-lists",
            "insert-task-list",
            "get-task-list",
            "update-task-list",
            "patch-task-list",
            "delete-task-list",
            "list-tasks",
            "insert-task",
            "get-task",
            "update-task",
            "patch-task",
            "delete-task",
            "move-task",
            "clear-tasks",
        ] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[tokio::test]
    async fn test_every_tool_renders_its_url() {
        let cases = [
            ("list-task-lists", json!({}), ApiMethod::Get, "/users/@me/lists"),
            ("insert-task-list", json!({}), ApiMethod::Post, "/users/@me/lists"),
            ("get-task-list", json!({ "tasklist": "L1" }), ApiMethod::Get, "/users/@me/lists/L1"),
            ("update-task-list", json!({ "tasklist": "L1" }), ApiMethod::Put, "/users/@me/lists/L1"),
            ("patch-task-list", json!({ "tasklist": "L1" }), ApiMethod::Patch, "/users/@me/lists/L1"),
            ("delete-task-list", json!({ "tasklist": "L1" }), ApiMethod::Delete, "/users/@me/lists/L1"),
            ("list-tasks", json!({ "tasklist": "abc" }), ApiMethod::Get, "/lists/abc/tasks"),
            ("insert-task", json!({ "tasklist": "abc" }), ApiMethod::Post, "/lists/abc/tasks"),
            ("get-task", json!({ "tasklist": "abc", "task": "123" }), ApiMethod::Get, "/lists/abc/tasks/123"),
            ("update-task", json!({ "tasklist": "abc", "task": "123" }), ApiMethod::Put, "/lists/abc/tasks/123"),
            ("patch-task", json!({ "tasklist": "abc", "task": "123" }), ApiMethod::Patch, "/lists/abc/tasks/123"),
            ("delete-task", json!({ "tasklist": "abc", "task": "123" }), ApiMethod::Delete, "/lists/abc/tasks/123"),
            ("move-task", json!({ "tasklist": "abc", "task": "123" }), ApiMethod::Post, "/lists/abc/tasks/123/move"),
            ("clear-tasks", json!({ "tasklist": "abc" }), ApiMethod::Post, "/lists/abc/clear"),
        ];

        for (name, arguments, method, path) in cases {
            let api = Arc::new(RecordingApi::ok(json!({})));
            let result = registry(&api).call_tool(name, arguments, None).await.unwrap();
            assert_eq!(result.is_error, None, "{name} failed");

            let sent = api.requests();
            assert_eq!(sent.len(), 1, "{name}");
            assert_eq!(sent[0].method, method, "{name}");
            assert_eq!(sent[0].path, path, "{name}");
            assert!(sent[0].payload.is_empty(), "{name} leaked path params");
        }
    }

    #[tokio::test]
    async fn test_list_tasks_filters_become_payload() {
        let api = Arc::new(RecordingApi::ok(json!({ "items": [] })));
        registry(&api)
            .call_tool(
                "list-tasks",
                json!({ "tasklist": "abc", "showCompleted": "false", "maxResults": "20" }),
                Some("Bearer xyz123"),
            )
            .await
            .unwrap();

        let sent = &api.requests()[0];
        assert_eq!(
            Value::Object(sent.payload.clone()),
            json!({ "showCompleted": "false", "maxResults": "20" })
        );
        assert_eq!(sent.bearer.as_deref(), Some("xyz123"));
    }

    #[tokio::test]
    async fn test_request_data_sent_verbatim() {
        let api = Arc::new(RecordingApi::ok(json!({ "id": "t1" })));
        let data = json!({ "title": "Buy milk", "due": "2025-01-01T00:00:00Z" });
        registry(&api)
            .call_tool(
                "insert-task",
                json!({ "tasklist": "abc", "parent": "p1", "requestData": data }),
                None,
            )
            .await
            .unwrap();

        assert_eq!(Value::Object(api.requests()[0].payload.clone()), data);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_independent() {
        let api = Arc::new(RecordingApi::ok(json!({ "id": "L1" })));
        let registry = registry(&api);

        let first = registry
            .call_tool("get-task-list", json!({ "tasklist": "L1" }), None)
            .await
            .unwrap();
        let second = registry
            .call_tool("get-task-list", json!({ "tasklist": "L1" }), None)
            .await
            .unwrap();

        let sent = api.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let api = Arc::new(RecordingApi::ok(json!({})));
        let err = registry(&api)
            .call_tool("unknown", json!({}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_api() {
        let api = Arc::new(RecordingApi::ok(json!({})));
        let err = registry(&api)
            .call_tool("get-task", json!({ "tasklist": "abc" }), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.requests().is_empty());
    }

    #[test]
    fn test_get_all_tools_metadata() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 14);
        let clear = tools.iter().find(|t| t.name == "clear-tasks").unwrap();
        assert_eq!(clear.description.as_deref(), Some("Clear completed tasks"));
    }
}
