// ABOUTME: Route handlers for workout submission and history retrieval
// ABOUTME: Validates input at the boundary, then delegates to the workout service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Workout routes
//!
//! Submission runs the full analysis orchestration; history is a plain
//! newest-first read. These endpoints are deliberately unauthenticated —
//! the surrounding app establishes identity through the auth endpoints but
//! workout records are not scoped per user.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::errors::AppError;
use crate::models::NewWorkout;
use crate::resources::ServerResources;

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", post(Self::handle_submit))
            .route("/api/workouts", get(Self::handle_history))
            .with_state(resources)
    }

    /// Handle POST /api/workouts - record a workout
    ///
    /// Invalid submissions (non-positive weight, reps, or sets) are rejected
    /// before any orchestration work. Analysis failures do not surface here;
    /// the recorded session carries the fallback verdict instead.
    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Json(submission): Json<NewWorkout>,
    ) -> Result<Response, AppError> {
        submission.validate()?;

        let session = resources.workout_service.submit(submission).await?;
        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    /// Handle GET /api/workouts - last 20 sessions, newest first
    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let sessions = resources.workout_service.history().await?;
        Ok((StatusCode::OK, Json(sessions)).into_response())
    }
}
