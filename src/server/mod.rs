//! MCP server for the normalization helpers.
//!
//! This module provides the MCP protocol server that exposes each helper
//! as a tool to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::NormHelpersServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once
/// the client disconnects.
pub async fn run_server(server: NormHelpersServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
