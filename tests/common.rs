// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, scripted LLM providers, and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Shared test utilities for `evergain_server`
//!
//! Common setup functions to reduce duplication across integration tests.
//! Every test environment runs against an in-memory `SQLite` database and a
//! scripted LLM provider so no test touches the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use evergain_server::{
    config::{Environment, LogLevel, ServerConfig},
    database::Database,
    llm::{LlmProvider, ProviderError},
    models::NewWorkout,
    resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory, migrations applied)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:", 5).await?)
}

/// Configuration for tests: fixed secret, in-memory database, short analysis deadline
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        jwt_secret: "integration-test-secret".to_owned(),
        gemini_api_key: String::new(),
        gemini_model: "scripted-test".to_owned(),
        log_level: LogLevel::Warn,
        environment: Environment::Development,
        analysis_timeout: Duration::from_millis(200),
    }
}

/// Build full server resources around a scripted provider
pub async fn create_test_resources(
    provider: Arc<ScriptedProvider>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(test_config()),
        provider,
    )))
}

/// A typical submission used across tests
pub fn sample_workout() -> NewWorkout {
    NewWorkout {
        weight: 102.5,
        reps: 5,
        sets: 3,
        feeling: "strong".to_owned(),
    }
}

/// Serialize a complete coaching verdict the way the model is asked to answer
pub fn verdict_json(status: &str, advice: &str, color: &str, risk: &str) -> String {
    serde_json::json!({
        "status": status,
        "advice": advice,
        "color": color,
        "risk": risk,
    })
    .to_string()
}

/// Wrap a response in a markdown code fence the way Gemini often answers
pub fn fenced(inner: &str) -> String {
    format!("```json\n{inner}\n```")
}

// ============================================================================
// Scripted LLM provider
// ============================================================================

enum Script {
    /// Return this text from every call
    Respond(String),
    /// Fail every call with a transport error
    FailTransport(String),
    /// Fail every call with an empty-response error
    FailEmpty,
    /// Sleep far past any test deadline
    Hang,
}

/// Scripted in-process LLM provider
///
/// Returns a fixed outcome per call, counts invocations, and records every
/// prompt so orchestration tests can assert both whether the analysis step
/// was reached and what history it saw.
pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    /// Provider that answers every call with `text`
    pub fn respond(text: impl Into<String>) -> Arc<Self> {
        Self::with_script(Script::Respond(text.into()))
    }

    /// Provider that fails every call with a transport error
    pub fn fail(message: impl Into<String>) -> Arc<Self> {
        Self::with_script(Script::FailTransport(message.into()))
    }

    /// Provider that returns no content on every call
    pub fn empty() -> Arc<Self> {
        Self::with_script(Script::FailEmpty)
    }

    /// Provider that never answers within the analysis deadline
    pub fn hang() -> Arc<Self> {
        Self::with_script(Script::Hang)
    }

    fn with_script(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Number of `complete` calls observed so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-test"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::FailTransport(message) => Err(ProviderError::Transport {
                provider: "scripted",
                message: message.clone(),
            }),
            Script::FailEmpty => Err(ProviderError::Empty {
                provider: "scripted",
            }),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(ProviderError::Empty {
                    provider: "scripted",
                })
            }
        }
    }
}
