// ABOUTME: Database connection management, schema migration, and store accessors
// ABOUTME: Owns the bounded SQLite pool shared by the user and workout stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Database Management
//!
//! The [`Database`] handle owns the SQLite connection pool and runs the
//! idempotent schema migration at startup. It is created once, injected into
//! the stores through `ServerResources`, and closed on shutdown — no ambient
//! global connection state.

pub mod users;
pub mod workouts;

pub use users::UserStore;
pub use workouts::WorkoutStore;

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Database manager for user and workout storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool and apply the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created or migration fails.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        info!(max_connections, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run idempotent schema migration
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                weight REAL NOT NULL,
                reps INTEGER NOT NULL,
                sets INTEGER NOT NULL,
                feeling TEXT NOT NULL,
                progress_state TEXT NOT NULL,
                advice TEXT NOT NULL,
                color TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workouts_created_at ON workouts (created_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check database connectivity for the readiness endpoint
    ///
    /// # Errors
    ///
    /// Returns a database error if the probe query fails.
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database health check failed: {e}")))?;
        Ok(())
    }

    /// Close the pool, waiting for in-flight connections to finish
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
