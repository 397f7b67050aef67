// ABOUTME: Core data models for workout sessions, analysis results, and users
// ABOUTME: Defines the shapes persisted by the stores and serialized over the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Data Models
//!
//! Core data structures used throughout the EverGain server.
//!
//! ## Core Models
//!
//! - [`WorkoutSession`]: a fully-populated, persisted workout record
//! - [`NewWorkout`]: the raw submission before enrichment
//! - [`AnalysisResult`]: the transient coaching verdict copied onto a session
//! - [`ProgressState`]: the known progress states (storage remains permissive)
//! - [`User`]: an account record
//!
//! `AnalysisResult.status`/`risk` and `WorkoutSession.progress_state` are
//! deliberately plain strings: the model's verdict is stored verbatim, even
//! when it is outside the known [`ProgressState`] set.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

// ============================================================================
// Workout Sessions
// ============================================================================

/// A persisted workout session, fully populated before insert
///
/// Invariant: `progress_state`, `advice`, and `color` are always set before
/// the record reaches the store — from a successful analysis or from the
/// fallback policy, never left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier, assigned by the store on insert
    pub id: i64,
    /// Weight lifted in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: i64,
    /// Number of sets
    pub sets: i64,
    /// Free-text description of how the session felt
    pub feeling: String,
    /// Progress verdict (`progress_up`, `stagnant`, `unsafe`, `down`, `unknown`)
    pub progress_state: String,
    /// Coaching advice attached to the session
    pub advice: String,
    /// Hex color matching the progress verdict
    pub color: String,
    /// Creation timestamp, assigned by the store on insert (UTC)
    pub created_at: DateTime<Utc>,
}

/// A workout submission before enrichment and persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Weight lifted in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: i64,
    /// Number of sets
    pub sets: i64,
    /// Free-text description of how the session felt
    #[serde(default)]
    pub feeling: String,
}

impl NewWorkout {
    /// Validate the submission before any orchestration work
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if weight, reps, or sets is not positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.weight <= 0.0 || !self.weight.is_finite() {
            return Err(AppError::invalid_input("weight must be a positive number"));
        }
        if self.reps <= 0 {
            return Err(AppError::invalid_input("reps must be a positive integer"));
        }
        if self.sets <= 0 {
            return Err(AppError::invalid_input("sets must be a positive integer"));
        }
        Ok(())
    }
}

/// Known progress states
///
/// Storage and serialization stay permissive (plain strings); this enum names
/// the states the coaching prompt asks for, plus the fallback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressState {
    /// Load, reps, or quality improved
    ProgressUp,
    /// No meaningful change against history
    Stagnant,
    /// Form or loading judged risky
    Unsafe,
    /// Performance dropped
    Down,
    /// No analysis available (fallback)
    Unknown,
}

impl ProgressState {
    /// String form used for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProgressUp => "progress_up",
            Self::Stagnant => "stagnant",
            Self::Unsafe => "unsafe",
            Self::Down => "down",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for ProgressState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProgressState {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "progress_up" => Ok(Self::ProgressUp),
            "stagnant" => Ok(Self::Stagnant),
            "unsafe" => Ok(Self::Unsafe),
            "down" => Ok(Self::Down),
            "unknown" => Ok(Self::Unknown),
            _ => Err(AppError::invalid_input(format!(
                "Invalid progress state: {s}"
            ))),
        }
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// The coaching verdict produced for one submission
///
/// Transient: its fields are copied onto the [`WorkoutSession`] and the value
/// itself is never persisted. All four fields are required — a response
/// missing any of them does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Progress verdict (expected `progress_up`/`stagnant`/`unsafe`/`down`,
    /// stored verbatim either way)
    pub status: String,
    /// Short coaching advice (two sentences by convention)
    pub advice: String,
    /// Hex color matching the verdict
    pub color: String,
    /// Risk assessment (expected `Safe`/`Caution`/`High Risk`)
    pub risk: String,
}

// ============================================================================
// Users & Auth
// ============================================================================

/// An account record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned by the store
    pub id: i64,
    /// Display name
    pub full_name: String,
    /// Email address (unique, used for login)
    pub email: String,
    /// Bcrypt password hash; never serialized outward
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

/// Registration request body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Response for successful registration or login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Signed session token (HS256 JWT)
    pub token: String,
    /// The authenticated user (password hash omitted)
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workout_validation() {
        let good = NewWorkout {
            weight: 100.0,
            reps: 5,
            sets: 3,
            feeling: "good".into(),
        };
        assert!(good.validate().is_ok());

        let zero_weight = NewWorkout { weight: 0.0, ..good.clone() };
        assert!(zero_weight.validate().is_err());

        let negative_reps = NewWorkout { reps: -1, ..good.clone() };
        assert!(negative_reps.validate().is_err());

        let zero_sets = NewWorkout { sets: 0, ..good.clone() };
        assert!(zero_sets.validate().is_err());

        let nan_weight = NewWorkout { weight: f64::NAN, ..good };
        assert!(nan_weight.validate().is_err());
    }

    #[test]
    fn test_progress_state_round_trip() {
        for state in [
            ProgressState::ProgressUp,
            ProgressState::Stagnant,
            ProgressState::Unsafe,
            ProgressState::Down,
            ProgressState::Unknown,
        ] {
            assert_eq!(state.as_str().parse::<ProgressState>().unwrap(), state);
        }
        assert!("sideways".parse::<ProgressState>().is_err());
    }

    #[test]
    fn test_user_password_hash_not_serialized() {
        let user = User {
            id: 1,
            full_name: "Test".into(),
            email: "test@example.com".into(),
            password_hash: "$2b$12$secret".into(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret"));
        assert!(json.contains("test@example.com"));
    }

    #[test]
    fn test_analysis_result_requires_all_fields() {
        let missing_risk = r##"{"status":"stagnant","advice":"ok","color":"#00D1FF"}"##;
        assert!(serde_json::from_str::<AnalysisResult>(missing_risk).is_err());

        let complete =
            r##"{"status":"stagnant","advice":"ok","color":"#00D1FF","risk":"Safe"}"##;
        let parsed: AnalysisResult = serde_json::from_str(complete).unwrap();
        assert_eq!(parsed.status, "stagnant");
    }
}
