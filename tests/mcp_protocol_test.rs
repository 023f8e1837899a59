//! MCP protocol integration test.
//!
//! Drives the server through rmcp's client over an in-memory duplex pipe and
//! checks tool discovery and the initialize handshake.

use google_tasks_mcp_server::core::{Config, McpServer};
use rmcp::model::ClientInfo;
use rmcp::{ClientHandler, ServiceExt};

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(64 * 1024);

    let server = McpServer::new(Config::default())?;
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    let info = client.peer_info().expect("server info after handshake");
    assert_eq!(info.server_info.name, "google-tasks-mcp-server");
    assert!(info.capabilities.tools.is_some());

    let tools = client.list_tools(None).await?;
    let mut tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    tool_names.sort_unstable();
    assert_eq!(
        tool_names,
        vec![
            "clear-tasks",
            "delete-task",
            "delete-task-list",
            "get-task",
            "get-task-list",
            "insert-task",
            "insert-task-list",
            "list-task-lists",
            "list-tasks",
            "move-task",
            "patch-task",
            "patch-task-list",
            "update-task",
            "update-task-list",
        ]
    );

    let get_task = tools.tools.iter().find(|t| t.name == "get-task").unwrap();
    let required = get_task.input_schema["required"].as_array().unwrap();
    assert!(required.iter().any(|v| *v == "tasklist"));
    assert!(required.iter().any(|v| *v == "task"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
