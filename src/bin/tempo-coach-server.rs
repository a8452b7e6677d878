// ABOUTME: Server binary for the Tempo Coach API
// ABOUTME: Wires logging, configuration, database, and the LLM provider, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tempo Fit

//! # Tempo Coach API Server Binary
//!
//! Starts the coach/client/plan REST API with SQLite persistence and an
//! OpenAI-compatible chat-completion provider for plan generation.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tempo_coach_server::{
    config::ServerConfig,
    database::Database,
    llm::{LlmProvider, OpenAiCompatibleProvider},
    logging,
    server::{CoachServer, ServerResources},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tempo-coach-server")]
#[command(about = "Tempo Coach API - AI-assisted training plan backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Tempo Coach API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;

    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiCompatibleProvider::from_config(&config.llm)?);
    info!(
        "LLM provider initialized: {} (model {})",
        provider.display_name(),
        provider.default_model()
    );

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, provider, Arc::new(config)));
    let server = CoachServer::new(resources);

    display_available_endpoints(http_port);
    info!("Ready to serve coaching data!");

    if let Err(e) = server.run(http_port).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints with their port
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("Coaches:");
    info!("   Create Coach:      POST http://{host}:{port}/api/coaches");
    info!("   List Coaches:      GET  http://{host}:{port}/api/coaches");
    info!("   Get Coach:         GET  http://{host}:{port}/api/coaches/{{id}}");
    info!("Clients:");
    info!("   Create Client:     POST http://{host}:{port}/api/clients");
    info!("   List Clients:      GET  http://{host}:{port}/api/clients?coach_id={{coach_id}}");
    info!("   Get Client:        GET  http://{host}:{port}/api/clients/{{id}}");
    info!("   Replace Client:    PUT  http://{host}:{port}/api/clients/{{id}}");
    info!("Plans:");
    info!("   Generate Plan:     POST http://{host}:{port}/api/plans/generate");
    info!("   List Plans:        GET  http://{host}:{port}/api/plans?client_id={{client_id}}");
    info!("   Get Plan:          GET  http://{host}:{port}/api/plans/{{id}}");
    info!("=== End of Endpoint List ===");
}
