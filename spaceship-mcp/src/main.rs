//! MCP Server entry point for the Spaceship registrar
//!
//! Starts the MCP server with stdio transport. Credentials come from the
//! `SPACESHIP_API_KEY` / `SPACESHIP_API_SECRET` environment variables; a missing
//! value is reported but does not stop the server, so the host still gets the
//! tool catalog and sees the registrar's own authentication errors.

mod config;
mod resources;
mod schemas;
mod server;
mod tools;

use std::process::ExitCode;
use std::sync::Arc;

use config::Config;
use rmcp::ServiceExt;
use server::SpaceshipMcp;
use spaceship_provider::SpaceshipClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Spaceship MCP Server");

    let config = Config::from_env();
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!("Using Spaceship API at {}", config.credentials.base_url);

    let client = match SpaceshipClient::new(config.credentials) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create Spaceship client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mcp_server = SpaceshipMcp::new(Arc::new(client));

    tracing::info!(
        "MCP server initialized with {} tools",
        mcp_server.tools().len()
    );

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
