//! Uniform response envelopes returned for every tool call.
//!
//! Success: `{ "content": [{ "type": "text", "text": <pretty JSON> }] }`
//! with no `isError` key. Failure: the same shape plus `"isError": true`.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use super::error::ToolError;

/// Wrap an API response body, pretty-printed with two-space indentation.
pub fn success(body: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(body) {
        Ok(text) => CallToolResult {
            content: vec![Content::text(text)],
            structured_content: None,
            is_error: None,
            meta: None,
        },
        Err(e) => failure(&ToolError::internal(e.to_string())),
    }
}

/// Wrap a failure. API failures are prefixed `API Error: `, anything else
/// `Error: `.
pub fn failure(err: &ToolError) -> CallToolResult {
    let text = match err {
        ToolError::Api(api) => format!("API Error: {api}"),
        other => format!("Error: {other}"),
    };
    CallToolResult::error(vec![Content::text(text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::client::ApiError;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = success(&json!({ "id": "1" }));
        let serialized = serde_json::to_value(&result).unwrap();
        assert_eq!(
            serialized,
            json!({ "content": [{ "type": "text", "text": "{\n  \"id\": \"1\"\n}" }] })
        );
    }

    #[test]
    fn test_api_failure_shape() {
        let err = ToolError::Api(ApiError::from_response(
            StatusCode::NOT_FOUND,
            &json!({ "message": "Not Found" }),
            "HTTP status client error (404 Not Found)",
        ));
        let serialized = serde_json::to_value(failure(&err)).unwrap();
        assert_eq!(
            serialized,
            json!({
                "isError": true,
                "content": [{ "type": "text", "text": "API Error: Not Found" }]
            })
        );
    }

    #[test]
    fn test_other_failure_prefix() {
        let result = failure(&ToolError::internal("boom"));
        assert_eq!(result.is_error, Some(true));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Error: Internal error: boom");
    }
}
