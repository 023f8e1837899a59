//! Request dispatcher shared by every Google Tasks tool.
//!
//! Turns validated tool arguments into one [`ResolvedRequest`], sends it
//! through the [`TasksApi`] seam and wraps the outcome in an envelope.
//! Nothing here keeps state between calls.

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use tracing::{error, info, instrument};

use super::client::TasksApi;
use super::endpoint::{ApiMethod, Endpoint};
use super::envelope;
use super::error::ToolError;

/// Reserved argument whose object value becomes the entire payload.
pub const REQUEST_DATA: &str = "requestData";

const BEARER_PREFIX: &str = "Bearer ";

/// A single outbound API call, fully resolved from one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub method: ApiMethod,
    /// Path relative to the API base, placeholders substituted.
    pub path: String,
    /// Query parameters for GET/DELETE, JSON body otherwise.
    pub payload: JsonObject,
    pub bearer: Option<String>,
}

impl ResolvedRequest {
    /// Payload flattened to query pairs. Strings are sent as-is, nulls are
    /// dropped and other values use their JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.payload
            .iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key.clone(), s.clone())),
                other => Some((key.clone(), other.to_string())),
            })
            .collect()
    }

    /// Encoded query string, used for logging.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(self.query_pairs()).unwrap_or_default()
    }
}

/// Token from an `authorization` header value, without its `Bearer ` prefix.
///
/// A value without the prefix is used whole; an empty token means no
/// credential.
pub fn bearer_token(authorization: Option<&str>) -> Option<String> {
    let value = authorization?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolve validated arguments against an endpoint.
///
/// Path parameters are consumed into the path. A non-empty `requestData`
/// object replaces every other argument as the payload; otherwise the
/// remaining arguments are the payload.
pub fn resolve(
    endpoint: &Endpoint,
    mut arguments: JsonObject,
    authorization: Option<&str>,
) -> Result<ResolvedRequest, ToolError> {
    let path = endpoint.render(&arguments)?;
    for name in endpoint.path_params() {
        arguments.remove(name);
    }

    let payload = match arguments.remove(REQUEST_DATA) {
        Some(Value::Object(data)) if !data.is_empty() => data,
        None | Some(Value::Null) | Some(Value::Object(_)) => arguments,
        Some(other) => {
            return Err(ToolError::internal(format!(
                "'{REQUEST_DATA}' must be an object, got {other}"
            )));
        }
    };

    Ok(ResolvedRequest {
        method: endpoint.method,
        path,
        payload,
        bearer: bearer_token(authorization),
    })
}

/// Run one tool invocation end to end. Never fails: errors are logged and
/// returned as error envelopes.
#[instrument(skip_all, fields(tool = tool, method = %endpoint.method))]
pub async fn dispatch(
    api: &dyn TasksApi,
    tool: &str,
    endpoint: &Endpoint,
    arguments: JsonObject,
    authorization: Option<&str>,
) -> CallToolResult {
    match execute(api, endpoint, arguments, authorization).await {
        Ok(body) => envelope::success(&body),
        Err(err) => {
            error!("Tool '{}' failed: {}", tool, err);
            envelope::failure(&err)
        }
    }
}

async fn execute(
    api: &dyn TasksApi,
    endpoint: &Endpoint,
    arguments: JsonObject,
    authorization: Option<&str>,
) -> Result<Value, ToolError> {
    let request = resolve(endpoint, arguments, authorization)?;

    if request.method.sends_query() {
        info!("{} {} ?{}", request.method, request.path, request.query_string());
    } else {
        info!("{} {}", request.method, request.path);
    }

    Ok(api.send(&request).await?)
}
