// ABOUTME: LLM provider abstraction for the workout analysis pipeline
// ABOUTME: Defines the completion contract implemented by the Gemini backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # LLM Provider Interface
//!
//! The analysis pipeline talks to its model backend through [`LlmProvider`],
//! a minimal single-shot completion contract: one prompt in, one block of
//! text out. Keeping the surface this small lets tests substitute scripted
//! providers without touching the HTTP layer.
//!
//! [`GeminiProvider`] is the production implementation, backed by Google's
//! Generative Language API.

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Failure modes when talking to an LLM backend
///
/// Callers that need to distinguish "the network broke" from "the model
/// answered with nothing" can match on the variant; everyone else converts
/// to [`AppError`] via `From`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request could not be completed
    #[error("{provider} request failed: {message}")]
    Transport {
        /// Provider identifier (e.g., "gemini")
        provider: &'static str,
        /// Underlying failure description
        message: String,
    },

    /// The backend answered with a non-success status or an error payload
    #[error("{provider} API error ({status}): {message}")]
    Api {
        /// Provider identifier
        provider: &'static str,
        /// HTTP status code returned by the backend
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// The backend answered successfully but produced no usable text
    #[error("{provider} returned no content")]
    Empty {
        /// Provider identifier
        provider: &'static str,
    },
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        // Display already names the provider; no need for the two-part ctor
        Self::new(ErrorCode::ExternalServiceError, err.to_string())
    }
}

/// Single-shot completion contract for LLM backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Model identifier used for completions
    fn model(&self) -> &str;

    /// Generate a completion for a single prompt
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
