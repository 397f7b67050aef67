// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the banner, liveness, and database-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Health check routes for service monitoring
//!
//! The banner endpoint mirrors what the mobile app pings during development;
//! `/api/health` and `/api/ready` are for load balancers and deploy checks.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::warn;

use crate::constants::service;
use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/api/health", get(Self::handle_health))
            .route("/api/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET / - plain banner
    async fn handle_index() -> &'static str {
        "EverGain Backend is running!"
    }

    /// Handle GET /api/health - liveness
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service::NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    /// Handle GET /api/ready - readiness including database connectivity
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.health_check().await {
            Ok(()) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
                .into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "timestamp": Utc::now().to_rfc3339(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
