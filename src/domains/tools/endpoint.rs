//! HTTP method and URL template of a Google Tasks API operation.
//!
//! Path parameters are written as `{name}` placeholders; the placeholder
//! name is the argument name the value is taken from.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;

/// HTTP methods used by the Google Tasks API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl ApiMethod {
    /// GET and DELETE carry their payload in the query string; the others
    /// send it as a JSON body.
    pub fn sends_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ApiMethod> for reqwest::Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Put => reqwest::Method::PUT,
            ApiMethod::Patch => reqwest::Method::PATCH,
            ApiMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API operation: a method plus a path template relative to the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: ApiMethod,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(method: ApiMethod, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Names of the `{placeholder}` segments, in template order.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> + 'static {
        let path: &'static str = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|chunk| chunk.split_once('}').map(|(name, _)| name))
    }

    /// Substitute every placeholder with the matching string argument.
    ///
    /// Values are inserted verbatim in a single pass, so a value that itself
    /// looks like a placeholder is never expanded again.
    pub fn render(&self, arguments: &JsonObject) -> Result<String, ToolError> {
        let mut rendered = String::with_capacity(self.path.len() + 32);
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                ToolError::internal(format!("unterminated placeholder in '{}'", self.path))
            })?;
            let name = &after[..end];

            let value = arguments
                .get(name)
                .and_then(Value::as_str)
                .ok_or_else(|| ToolError::internal(format!("missing path parameter '{name}'")))?;
            rendered.push_str(value);

            rest = &after[end + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}
