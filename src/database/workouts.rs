// ABOUTME: Database operations for workout sessions (the history store)
// ABOUTME: Persists fully-populated sessions and retrieves recent history, newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Workout history store
//!
//! Sessions are written exactly once, fully populated, and never updated.
//! "History" is the N most recent rows by `created_at`; there are no
//! relationships between sessions beyond temporal ordering.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::models::{NewWorkout, WorkoutSession};

/// Workout session database operations
pub struct WorkoutStore {
    pool: SqlitePool,
}

impl WorkoutStore {
    /// Create a new workout store
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the most recent sessions, newest first
    ///
    /// Returns an empty vector when no sessions exist. Never returns more
    /// than `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn fetch_recent(&self, limit: i64) -> AppResult<Vec<WorkoutSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, weight, reps, sets, feeling, progress_state, advice, color, created_at
            FROM workouts
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch recent workouts: {e}")))?;

        rows.iter().map(row_to_session).collect()
    }

    /// Insert a fully-populated session
    ///
    /// `progress_state`, `advice`, and `color` must already be set by the
    /// caller (enriched or fallback); the id and `created_at` are assigned
    /// here. On error the submission is not recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn persist(
        &self,
        submission: &NewWorkout,
        progress_state: &str,
        advice: &str,
        color: &str,
    ) -> AppResult<WorkoutSession> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO workouts (weight, reps, sets, feeling, progress_state, advice, color, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(submission.weight)
        .bind(submission.reps)
        .bind(submission.sets)
        .bind(&submission.feeling)
        .bind(progress_state)
        .bind(advice)
        .bind(color)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(WorkoutSession {
            id: result.last_insert_rowid(),
            weight: submission.weight,
            reps: submission.reps,
            sets: submission.sets,
            feeling: submission.feeling.clone(),
            progress_state: progress_state.to_owned(),
            advice: advice.to_owned(),
            color: color.to_owned(),
            created_at: now,
        })
    }
}

fn row_to_session(row: &SqliteRow) -> AppResult<WorkoutSession> {
    let created_at_str: String = row.get("created_at");

    Ok(WorkoutSession {
        id: row.get("id"),
        weight: row.get("weight"),
        reps: row.get("reps"),
        sets: row.get("sets"),
        feeling: row.get("feeling"),
        progress_state: row.get("progress_state"),
        advice: row.get("advice"),
        color: row.get("color"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
