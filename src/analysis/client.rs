// ABOUTME: Builds the deterministic coaching prompt and calls the LLM provider under a deadline
// ABOUTME: Returns raw response text; interpretation is a separate step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use super::AnalysisError;
use crate::llm::LlmProvider;
use crate::models::{NewWorkout, WorkoutSession};

/// Analysis client: one prompt, one provider call, one raw text response
///
/// Holds the provider behind `Arc<dyn LlmProvider>` so tests can substitute
/// scripted implementations. The deadline is applied around the whole
/// provider call; a hung provider yields [`AnalysisError::Timeout`] rather
/// than blocking the submission.
pub struct WorkoutAnalyzer {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl WorkoutAnalyzer {
    /// Create an analyzer backed by the given provider and deadline
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Request an analysis of the current submission against recent history
    ///
    /// Returns the provider's raw response text. At most one external call
    /// is made per invocation; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Timeout`] when the deadline expires,
    /// [`AnalysisError::EmptyResponse`] when the provider produces no text,
    /// and [`AnalysisError::Transport`] for any other provider failure.
    #[instrument(skip(self, current, history), fields(provider = %self.provider.name(), history_len = history.len()))]
    pub async fn analyze(
        &self,
        current: &NewWorkout,
        history: &[WorkoutSession],
    ) -> Result<String, AnalysisError> {
        let prompt = build_prompt(current, history);

        debug!(model = %self.provider.model(), "Requesting workout analysis");

        let raw = tokio::time::timeout(self.timeout, self.provider.complete(&prompt))
            .await
            .map_err(|_| AnalysisError::Timeout {
                seconds: self.timeout.as_secs(),
            })??;

        debug!(chars = raw.len(), "Received analysis response");

        Ok(raw)
    }
}

/// Render the history block: one line per session, newest first, empty
/// string when there is no history
fn build_history_block(history: &[WorkoutSession]) -> String {
    let mut block = String::new();
    for session in history {
        let _ = writeln!(
            block,
            "- Date: {}, Weight: {:.1}kg, Reps: {}, Sets: {}, Feeling: {}",
            session.created_at.format("%Y-%m-%d"),
            session.weight,
            session.reps,
            session.sets,
            session.feeling
        );
    }
    block
}

/// Build the coaching prompt for one submission
///
/// The text is deterministic: fixed color legend, history lines, current
/// session, task instructions, and the required output shape.
fn build_prompt(current: &NewWorkout, history: &[WorkoutSession]) -> String {
    format!(
        r##"
You are EverGain AI, a smart fitness coach.
Analyze the user's latest workout and compare it with history.

**Context (Color System - Smart Growth Noir):**
- **Lime Green (#C6FF5E)**: Progress Up / Success / Good Overload.
- **Electric Blue (#00D1FF)**: Stagnant / Maintenance / Needs Optimization.
- **Red (#FF5E5E)**: Unsafe / Ego Lifting / Injury Risk / Performance Drop.

**User History (Last 5 sessions):**
{history}

**Current Session:**
- Weight: {weight:.1}kg
- Reps: {reps}
- Sets: {sets}
- Feeling: {feeling}

**Task:**
Analyze the progress. Is it up, stagnant, or down?
Provide brief, punchy advice (max 2 sentences).
Assign the correct hex color based on the status.
Assess risk (Safe / Caution / High Risk).

**Output JSON ONLY:**
{{
  "status": "progress_up" | "stagnant" | "unsafe" | "down",
  "advice": "...",
  "color": "#HEX",
  "risk": "..."
}}
"##,
        history = build_history_block(history),
        weight = current.weight,
        reps = current.reps,
        sets = current.sets,
        feeling = current.feeling
    )
}
