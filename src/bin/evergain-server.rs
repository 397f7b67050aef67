// ABOUTME: Main server binary for the EverGain workout tracking backend
// ABOUTME: Loads configuration, wires shared resources, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # EverGain Server Binary
//!
//! Starts the EverGain backend: REST API for workout logging with
//! AI-assisted progress analysis, JWT authentication, and SQLite storage.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use evergain_server::{
    config::ServerConfig,
    database::Database,
    llm::{GeminiProvider, LlmProvider},
    logging,
    resources::ServerResources,
    server,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "evergain-server")]
#[command(about = "EverGain backend - workout logging with AI coaching feedback")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(port) = args.port {
        config.http_port = port;
    }

    logging::init(&config)?;

    info!(
        "Starting EverGain backend v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // Initialize database and run migrations
    let database = Database::new(&config.database_url, config.db_max_connections()).await?;
    info!("Database initialized: {}", config.database_url);

    if !config.has_gemini_key() {
        warn!("GEMINI_API_KEY is not set; every workout will receive the fallback verdict");
    }

    let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?);
    info!(model = %config.gemini_model, "Analysis provider configured");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config), provider));

    display_available_endpoints(port);

    server::serve(resources, port).await
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Register:        POST http://{host}:{port}/api/auth/register");
    info!("   Login:           POST http://{host}:{port}/api/auth/login");
    info!("   Submit Workout:  POST http://{host}:{port}/api/workouts");
    info!("   Workout History: GET  http://{host}:{port}/api/workouts");
    info!("   Health Check:    GET  http://{host}:{port}/api/health");
    info!("   Readiness:       GET  http://{host}:{port}/api/ready");
    info!("=== End of Endpoint List ===");
}
