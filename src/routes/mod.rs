// ABOUTME: Route module organization for the EverGain HTTP API
// ABOUTME: Each domain module holds route definitions and thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Route modules for the EverGain server
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to the service
//! layer.

/// Registration and login routes
pub mod auth;
/// Health check and system status routes
pub mod health;
/// Workout submission and history routes
pub mod workouts;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use workouts::WorkoutRoutes;
