// ABOUTME: Route handlers for account registration and login
// ABOUTME: Thin wrappers that decode JSON bodies and delegate to the auth service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Registration and login routes
//!
//! Both endpoints return `{ token, user }` on success; the user object never
//! includes the password hash.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::errors::AppError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::resources::ServerResources;

/// Auth routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all auth routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Handle POST /api/auth/register - create an account
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let response = resources.auth_service.register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login - verify credentials
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let response = resources.auth_service.login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
