// ABOUTME: Database operations for user accounts
// ABOUTME: Handles account creation and email lookup over the shared pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// User account database operations
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Create a new user store
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account record
    ///
    /// The caller is responsible for hashing the password and for checking
    /// email uniqueness first; a racing duplicate insert surfaces as a
    /// database error from the unique constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (full_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        Ok(User {
            id: result.last_insert_rowid(),
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: now,
        })
    }

    /// Look up an account by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, full_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user by email: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let created_at_str: String = row.get("created_at");

    Ok(User {
        id: row.get("id"),
        full_name: row.get("full_name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
