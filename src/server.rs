// ABOUTME: HTTP server assembly: merges route modules, applies middleware, serves with shutdown
// ABOUTME: The router builder is separate from serving so tests can drive it in-process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # HTTP Server
//!
//! [`router`] assembles the full application router from the route modules
//! and shared middleware; [`serve`] binds it to a port and runs until a
//! shutdown signal arrives. Tests call [`router`] directly and drive it
//! with in-process requests instead of binding a socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::defaults;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{AuthRoutes, HealthRoutes, WorkoutRoutes};

/// Assemble the application router with all routes and middleware
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(resources))
        .layer(TimeoutLayer::new(Duration::from_secs(
            defaults::REQUEST_TIMEOUT_SECS,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
}

/// Bind the router to a port and serve until shutdown
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
pub async fn serve(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let app = router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("EverGain server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");

    Ok(())
}

/// Resolve when the process receives Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
