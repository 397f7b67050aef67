// ABOUTME: Google Gemini LLM provider for single-shot workout analysis prompts
// ABOUTME: Wraps the generateContent endpoint of the Generative Language API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! The API key comes from `GEMINI_API_KEY` (via `ServerConfig`), obtained
//! from Google AI Studio: <https://makersuite.google.com/app/apikey>

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{LlmProvider, ProviderError};
use crate::errors::{AppError, AppResult};

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Provider identifier used in logs and error messages
const PROVIDER_NAME: &str = "gemini";

/// Connection timeout for the cloud endpoint
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request timeout; the analysis layer applies its own tighter deadline
const REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

/// Content block holding one or more text parts
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

/// API error payload from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key and model identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    /// Build the API URL for the configured model and a method
    fn build_url(&self, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{}:{method}?key={}",
            self.model, self.api_key
        )
    }

    /// Extract the first text part from the first candidate
    fn extract_text(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
    }

    /// Map a non-success status to a provider error, pulling the message
    /// out of the JSON error payload when the body parses
    fn map_api_error(status: u16, body: &str) -> ProviderError {
        let message = serde_json::from_str::<GeminiResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.to_owned(), |e| e.message);

        ProviderError::Api {
            provider: PROVIDER_NAME,
            status,
            message,
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = self.build_url("generateContent");
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_owned(),
                }],
            }],
        };

        debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                provider: PROVIDER_NAME,
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport {
                provider: PROVIDER_NAME,
                message: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API returned an error");
            return Err(Self::map_api_error(status.as_u16(), &body));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            ProviderError::Transport {
                provider: PROVIDER_NAME,
                message: format!("Failed to parse Gemini response: {e}"),
            }
        })?;

        if let Some(api_error) = parsed.error {
            return Err(ProviderError::Api {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                message: api_error.message,
            });
        }

        debug!("Successfully received Gemini response");

        Self::extract_text(&parsed).ok_or(ProviderError::Empty {
            provider: PROVIDER_NAME,
        })
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            // Omit `client`; HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
