//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed through a `ToolRouter` built from the
//! tool table in `domains/tools/registry.rs`; the HTTP transport uses the
//! same table through `ToolRegistry`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::tools::{TasksApi, TasksClient, ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Google Tasks tools. Task lists live under list-task-lists / \
    get-task-list; tasks are addressed by `tasklist` and `task` identifiers. \
    Create and update calls take the resource fields in `requestData`.";

/// The main MCP server handler.
///
/// Holds one shared API client; handlers never keep per-call state.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based dispatch for the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the Google Tasks API.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let client = TasksClient::new(&config.api)
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server over a custom API transport.
    pub fn with_api(config: Config, api: Arc<dyn TasksApi>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(api.clone())),
            tool_router: build_tool_router::<Self>(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Server instructions reported at initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// `authorization` is the raw `Authorization` header of the HTTP request.
    /// Returns the serialized envelope; `Err` only for unknown tools and
    /// invalid arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        authorization: Option<&str>,
    ) -> Result<serde_json::Value, ToolError> {
        let result = self
            .registry
            .call_tool(name, arguments, authorization)
            .await?;
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_logging()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn set_level(
        &self,
        request: SetLevelRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<(), McpError> {
        info!("Client requested log level {:?}", request.level);
        Ok(())
    }
}
