//! Tools domain module.
//!
//! Every Google Tasks operation is exposed as one MCP tool. Tools are
//! table-driven: a tool only declares its name, description, endpoint and
//! parameter type; validation, request construction, the HTTP call and the
//! response envelope are shared.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool declarations, grouped by resource
//! - `descriptor.rs` - `ApiTool` trait and the type-erased `ToolDescriptor`
//! - `endpoint.rs` - HTTP method + URL template
//! - `dispatcher.rs` - Argument partitioning, bearer extraction, dispatch
//! - `client.rs` - `TasksApi` seam and the reqwest client
//! - `envelope.rs` - Success/error result shapes
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool table and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare a params struct and a unit struct implementing `ApiTool`
//!    in `definitions/`
//! 2. Add `ToolDescriptor::of::<NewTool>()` to `ToolRegistry::descriptors()`

pub mod client;
pub mod definitions;
pub mod descriptor;
pub mod dispatcher;
pub mod endpoint;
pub mod envelope;
mod error;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiError, TasksApi, TasksClient};
pub use descriptor::{ApiTool, ToolDescriptor};
pub use dispatcher::{ResolvedRequest, bearer_token, dispatch, resolve};
pub use endpoint::{ApiMethod, Endpoint};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
