//! Tool Router - builds the rmcp ToolRouter from the registry table.
//!
//! Used by the STDIO/TCP transports. Every route shares the same API client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::client::TasksApi;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn TasksApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::descriptors()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(tool.create_route(api.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    struct TestServer {}

    fn test_api() -> Arc<dyn TasksApi> {
        Arc::new(RecordingApi::ok(json!({})))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tools = router.list_all();
        assert_eq!(tools.len(), 14);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list-task-lists"));
        assert!(names.contains(&"get-task"));
        assert!(names.contains(&"move-task"));
        assert!(names.contains(&"clear-tasks"));
    }

    #[test]
    fn test_registry_matches_router() {
        let api = test_api();
        let registry = ToolRegistry::new(api.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
