// ABOUTME: Workout submission orchestrator: history fetch, analysis, fallback, persistence
// ABOUTME: Owns the fallback decision; analysis failures never block recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use tracing::{debug, info, warn};

use crate::analysis::{self, WorkoutAnalyzer};
use crate::constants::{colors, fallback, limits};
use crate::database::WorkoutStore;
use crate::errors::AppResult;
use crate::models::{NewWorkout, ProgressState, WorkoutSession};

/// Workout submission orchestration and history retrieval
///
/// Each submission runs the same sequence: fetch recent history, ask the
/// analyzer for a verdict, apply the verdict or the fixed fallback, persist.
/// Store failures are fatal to the submission; analysis failures are not.
pub struct WorkoutService {
    store: WorkoutStore,
    analyzer: WorkoutAnalyzer,
}

impl WorkoutService {
    /// Create a new workout service
    #[must_use]
    pub const fn new(store: WorkoutStore, analyzer: WorkoutAnalyzer) -> Self {
        Self { store, analyzer }
    }

    /// Record a workout submission, enriched by analysis where possible
    ///
    /// History fetch happens first; if it fails, the submission aborts
    /// before any analysis call is made. Any analysis or interpretation
    /// failure downgrades to the fallback verdict (`unknown`, fixed advice
    /// and color) — the workout is recorded either way. A persist failure
    /// is surfaced to the caller; the workout is then not recorded.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store fails to fetch history or to
    /// persist the session.
    pub async fn submit(&self, submission: NewWorkout) -> AppResult<WorkoutSession> {
        debug!(
            weight = submission.weight,
            reps = submission.reps,
            sets = submission.sets,
            "Workout submission received"
        );

        let history = self.store.fetch_recent(limits::ANALYSIS_HISTORY).await?;

        let verdict = self
            .analyzer
            .analyze(&submission, &history)
            .await
            .and_then(|raw| analysis::interpret(&raw));

        let session = match verdict {
            Ok(result) => {
                debug!(status = %result.status, "Applying analysis verdict");
                self.store
                    .persist(&submission, &result.status, &result.advice, &result.color)
                    .await?
            }
            Err(err) => {
                warn!(error = %err, "Workout analysis failed, applying fallback verdict");
                self.store
                    .persist(
                        &submission,
                        ProgressState::Unknown.as_str(),
                        fallback::ADVICE,
                        colors::FALLBACK_NEUTRAL,
                    )
                    .await?
            }
        };

        info!(
            session_id = session.id,
            progress_state = %session.progress_state,
            "Workout recorded"
        );

        Ok(session)
    }

    /// Return the most recent sessions, newest first
    ///
    /// Plain passthrough to the store; no enrichment.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn history(&self) -> AppResult<Vec<WorkoutSession>> {
        self.store.fetch_recent(limits::HISTORY_PAGE).await
    }
}
