// ABOUTME: Workout analysis pipeline: prompt construction, provider call, response interpretation
// ABOUTME: Defines the failure taxonomy the orchestrator maps to its fallback policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Workout Analysis
//!
//! The analysis pipeline turns a submission plus recent history into a
//! coaching verdict:
//!
//! 1. [`WorkoutAnalyzer`] builds the prompt and calls the LLM provider under
//!    a deadline, returning the raw response text.
//! 2. [`interpret`] normalizes that text (markdown fences happen) and parses
//!    it into an [`AnalysisResult`](crate::models::AnalysisResult).
//!
//! Every failure in this pipeline is an [`AnalysisError`]. None of them are
//! fatal to a submission: the orchestrator in
//! [`services::workouts`](crate::services::workouts) converts any variant
//! into the fixed fallback verdict and records the workout anyway.

mod client;
mod interpreter;

pub use client::WorkoutAnalyzer;
pub use interpreter::interpret;

use thiserror::Error;

use crate::llm::ProviderError;

/// Failure classes for the analysis pipeline
///
/// The orchestrator treats all of these identically (fallback verdict), but
/// logs carry the variant so a misbehaving provider and a misbehaving parser
/// are distinguishable in diagnostics.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Network, auth, or endpoint failure while calling the provider
    #[error("analysis transport failure: {message}")]
    Transport {
        /// Underlying failure description
        message: String,
    },

    /// The provider did not answer within the configured deadline
    #[error("analysis timed out after {seconds}s")]
    Timeout {
        /// The deadline that expired
        seconds: u64,
    },

    /// The provider answered but produced no text
    #[error("analysis returned an empty response")]
    EmptyResponse,

    /// The response text did not parse as an analysis result
    #[error("analysis response could not be parsed: {message}")]
    Parse {
        /// Parser failure description
        message: String,
    },
}

impl From<ProviderError> for AnalysisError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Empty { .. } => Self::EmptyResponse,
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}
