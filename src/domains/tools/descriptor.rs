//! Table entry describing one Google Tasks tool.
//!
//! Each tool is a zero-sized type implementing [`ApiTool`]. A
//! [`ToolDescriptor`] erases the parameter type so the registry, the rmcp
//! router and the HTTP transport can all work from the same list.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, warn};

use super::client::TasksApi;
use super::dispatcher::dispatch;
use super::endpoint::Endpoint;
use super::error::ToolError;

/// Static contract of a Google Tasks tool.
pub trait ApiTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Method and URL template the tool maps to.
    const ENDPOINT: Endpoint;

    /// Input schema; field names are the wire argument names.
    type Params: DeserializeOwned + Serialize + JsonSchema + 'static;
}

/// Type-erased [`ApiTool`].
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: Endpoint,
    input_schema: fn() -> JsonObject,
    validate: fn(JsonObject) -> Result<JsonObject, ToolError>,
}

impl ToolDescriptor {
    pub fn of<T: ApiTool>() -> Self {
        Self {
            name: T::NAME,
            description: T::DESCRIPTION,
            endpoint: T::ENDPOINT,
            input_schema: schema_for_type::<T::Params>,
            validate: validate_arguments::<T::Params>,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new((self.input_schema)()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Check arguments against the input schema.
    ///
    /// Returns the arguments as they will be forwarded: absent optionals are
    /// omitted and keys outside the schema are dropped.
    pub fn validate(&self, arguments: JsonObject) -> Result<JsonObject, ToolError> {
        (self.validate)(arguments)
    }

    /// Validate, then dispatch. Only validation failures are returned as
    /// `Err`; API and internal failures come back as error envelopes.
    pub async fn invoke(
        &self,
        api: &dyn TasksApi,
        arguments: JsonObject,
        authorization: Option<&str>,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = self.validate(arguments).inspect_err(|e| {
            warn!("Rejected call to '{}': {}", self.name, e);
        })?;
        info!("Tool '{}' called", self.name);
        Ok(dispatch(api, self.name, &self.endpoint, arguments, authorization).await)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    ///
    /// Neither transport carries request headers, so routed calls go out
    /// without a bearer token.
    pub fn create_route<S>(self, api: Arc<dyn TasksApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                self.invoke(api.as_ref(), args, None)
                    .await
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))
            }
            .boxed()
        })
    }
}

fn validate_arguments<P>(arguments: JsonObject) -> Result<JsonObject, ToolError>
where
    P: DeserializeOwned + Serialize,
{
    let params: P = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    match serde_json::to_value(params).map_err(|e| ToolError::internal(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ToolError::internal(format!(
            "parameters serialized to a non-object: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{GetTaskTool, InsertTaskTool, ListTasksTool};
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_required_argument_rejected() {
        let descriptor = ToolDescriptor::of::<GetTaskTool>();
        let err = descriptor
            .validate(args(json!({ "tasklist": "abc" })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("task"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let descriptor = ToolDescriptor::of::<GetTaskTool>();
        let err = descriptor
            .validate(args(json!({ "tasklist": "abc", "task": 123 })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_request_data_must_be_object() {
        let descriptor = ToolDescriptor::of::<InsertTaskTool>();
        let err = descriptor
            .validate(args(json!({ "tasklist": "abc", "requestData": "title" })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_unknown_keys_dropped_and_optionals_omitted() {
        let descriptor = ToolDescriptor::of::<ListTasksTool>();
        let validated = descriptor
            .validate(args(json!({ "tasklist": "abc", "dueMax": "2025-01-01T00:00:00Z", "bogus": "x" })))
            .unwrap();
        assert_eq!(
            validated,
            args(json!({ "tasklist": "abc", "dueMax": "2025-01-01T00:00:00Z" }))
        );
    }

    #[test]
    fn test_schema_lists_required_path_params() {
        let tool = ToolDescriptor::of::<GetTaskTool>().to_tool();
        let required: Vec<_> = tool.input_schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"tasklist"));
        assert!(required.contains(&"task"));
    }

    #[test]
    fn test_schema_uses_wire_names() {
        let tool = ToolDescriptor::of::<InsertTaskTool>().to_tool();
        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("requestData"));
        assert!(properties.contains_key("parent"));
        assert!(properties.contains_key("previous"));
    }

    #[test]
    fn test_schema_is_object_with_properties() {
        let tool = ToolDescriptor::of::<ListTasksTool>().to_tool();
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.input_schema["properties"]["showCompleted"].is_object());
    }
}
