// ABOUTME: Normalizes raw LLM response text and parses it into an AnalysisResult
// ABOUTME: Strips markdown code fences; strict about fields, permissive about values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use tracing::warn;

use super::AnalysisError;
use crate::models::AnalysisResult;

/// Parse raw response text into an [`AnalysisResult`]
///
/// The model sometimes wraps its JSON in markdown fencing; a leading
/// ```` ```json ```` or ```` ``` ```` marker and a trailing fence are
/// stripped before parsing. All four result fields must be present with
/// string values; their contents are not validated (an unexpected `status`
/// passes through verbatim).
///
/// # Errors
///
/// Returns [`AnalysisError::Parse`] when the normalized text is not a
/// well-formed result object.
pub fn interpret(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let normalized = normalize(raw);

    serde_json::from_str(normalized).map_err(|e| {
        warn!(error = %e, "Failed to parse analysis response");
        AnalysisError::Parse {
            message: e.to_string(),
        }
    })
}

/// Strip markdown code fencing and surrounding whitespace
fn normalize(raw: &str) -> &str {
    let mut text = raw.trim();
    text = text.strip_prefix("```json").unwrap_or(text);
    text = text.strip_prefix("```").unwrap_or(text);
    text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
