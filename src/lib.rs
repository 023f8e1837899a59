//! Google Tasks MCP Server Library
//!
//! Exposes the Google Tasks REST API as Model Context Protocol (MCP) tools.
//! Each API operation (task lists, tasks, move, clear) is one schema-validated
//! tool; a call is validated, turned into a single HTTP request with the
//! caller's bearer token, and answered with a uniform text envelope.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler, transports
//! - **domains**: business logic
//!   - **tools**: tool table, request dispatcher, Google Tasks client
//!
//! # Example
//!
//! ```rust,no_run
//! use google_tasks_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
