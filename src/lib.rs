// ABOUTME: Main library entry point for the EverGain workout tracking backend
// ABOUTME: Provides REST API, AI workout analysis, and SQLite persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

#![deny(unsafe_code)]

//! # EverGain Server
//!
//! Backend for the EverGain workout tracker. Every submitted workout is
//! enriched with an AI coaching verdict before it is stored: the service
//! fetches the lifter's recent history, asks the configured LLM for a
//! progress assessment, and persists the workout together with the
//! resulting status, advice, and UI color. When analysis fails for any
//! reason the workout is still recorded with a neutral fallback verdict.
//!
//! ## Features
//!
//! - **Workout logging**: Submit sessions and read back recent history
//! - **AI analysis**: Gemini-backed progress verdicts with strict response parsing
//! - **Fallback verdicts**: Analysis failures never lose a workout
//! - **JWT authentication**: Register/login with bcrypt password hashing
//! - **SQLite persistence**: Zero-setup embedded storage via `sqlx`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use evergain_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration (requires JWT_SECRET in the environment)
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("EverGain server configured for port {}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Workout analysis pipeline: prompt building, LLM calls, response interpretation
pub mod analysis;

/// JWT session token generation and validation
pub mod auth;

/// Configuration loaded from environment variables
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// SQLite persistence layer for users and workouts
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Common data models for workouts, analysis verdicts, and users
pub mod models;

/// Shared server resources wired once at startup
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and HTTP serving
pub mod server;

/// Domain service layer: auth flows and workout orchestration
pub mod services;
