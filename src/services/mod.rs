// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Route handlers decode requests and delegate here; services own the rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Domain service layer
//!
//! Business logic lives here, behind plain structs with injected
//! dependencies, so route handlers stay thin and the rules are testable
//! without HTTP plumbing.

/// Account registration, login, and credential validation
pub mod auth;

/// Workout submission orchestration and history retrieval
pub mod workouts;

pub use auth::AuthService;
pub use workouts::WorkoutService;
