// ABOUTME: Shared server resources container with dependency injection
// ABOUTME: Constructed once at startup and shared across all routes via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Server Resources
//!
//! All shared server state lives in [`ServerResources`], constructed once at
//! startup and handed to the router behind an `Arc`. Nothing in the request
//! path reaches for globals: the database handle, the auth manager, and the
//! domain services are all injected here.

use std::sync::Arc;

use crate::analysis::WorkoutAnalyzer;
use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::constants::defaults;
use crate::database::{Database, UserStore, WorkoutStore};
use crate::llm::LlmProvider;
use crate::services::{AuthService, WorkoutService};

/// Shared server state: one instance per process, shared via `Arc`
pub struct ServerResources {
    /// Database handle (cheap to clone; owns the connection pool)
    pub database: Database,
    /// JWT issuing and validation
    pub auth_manager: Arc<AuthManager>,
    /// Registration and login
    pub auth_service: AuthService,
    /// Workout submission orchestration and history
    pub workout_service: WorkoutService,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire up all services from their dependencies
    ///
    /// The LLM provider is injected so tests can substitute a scripted
    /// implementation for the analysis pipeline.
    #[must_use]
    pub fn new(
        database: Database,
        config: Arc<ServerConfig>,
        provider: Arc<dyn LlmProvider>,
    ) -> Self {
        let auth_manager = Arc::new(AuthManager::new(
            config.jwt_secret.as_bytes(),
            defaults::JWT_EXPIRY_HOURS,
        ));

        let auth_service = AuthService::new(
            UserStore::new(database.pool().clone()),
            Arc::clone(&auth_manager),
        );

        let analyzer = WorkoutAnalyzer::new(provider, config.analysis_timeout);
        let workout_service =
            WorkoutService::new(WorkoutStore::new(database.pool().clone()), analyzer);

        Self {
            database,
            auth_manager,
            auth_service,
            workout_service,
            config,
        }
    }
}
