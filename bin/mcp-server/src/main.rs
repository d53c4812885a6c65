//! BIN data MCP server — composition root
//!
//! Loads environment configuration, wires the Parrot adapter into
//! [`BinDataServer`], and serves MCP over stdio.

mod server;

use std::sync::Arc;

use bindata_adapters::parrot::ParrotClient;
use eyre::WrapErr;
use rmcp::{ServiceExt, transport::stdio};

use crate::server::BinDataServer;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Logs go to stderr; stdout carries the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Pick up a local .env before reading configuration.
    let _ = dotenvy::dotenv();

    // A missing API key is fatal here, before the transport comes up.
    let provider =
        ParrotClient::from_env().wrap_err("failed to configure the Parrot client")?;

    tracing::info!("bin-data MCP server starting on stdio");

    let service = BinDataServer::new(Arc::new(provider))
        .serve(stdio())
        .await
        .wrap_err("failed to start the MCP server")?;

    service.waiting().await.wrap_err("MCP server terminated abnormally")?;

    Ok(())
}
