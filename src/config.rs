// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads and validates server settings from environment variables and .env files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Environment-based configuration management
//!
//! All runtime settings come from environment variables (with `.env` support
//! for development). The JWT signing secret is required and has no default;
//! everything else falls back to a sensible development value.

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{defaults, env_vars, limits};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Server configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Gemini API key; empty means every analysis falls back
    pub gemini_api_key: String,
    /// Gemini model name
    pub gemini_model: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Outer deadline on a single analysis call
    pub analysis_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is unset or empty, or if a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let Some(jwt_secret) = env::var(env_vars::JWT_SECRET)
            .ok()
            .filter(|s| !s.is_empty())
        else {
            bail!("{} must be set to a non-empty secret", env_vars::JWT_SECRET);
        };

        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {}: {e}", env_vars::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let analysis_timeout_secs = match env::var(env_vars::ANALYSIS_TIMEOUT_SECS) {
            Ok(raw) => raw.parse().map_err(|e| {
                anyhow::anyhow!("Invalid {}: {e}", env_vars::ANALYSIS_TIMEOUT_SECS)
            })?,
            Err(_) => defaults::ANALYSIS_TIMEOUT_SECS,
        };

        let config = Self {
            http_port,
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_owned()),
            jwt_secret,
            gemini_api_key: env::var(env_vars::GEMINI_API_KEY).unwrap_or_default(),
            gemini_model: env::var(env_vars::GEMINI_MODEL)
                .unwrap_or_else(|_| defaults::GEMINI_MODEL.to_owned()),
            log_level: LogLevel::from_str_or_default(
                &env::var(env_vars::LOG_LEVEL).unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            analysis_timeout: Duration::from_secs(analysis_timeout_secs),
        };

        info!(
            port = config.http_port,
            environment = %config.environment,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Maximum database connections for the shared pool
    #[must_use]
    pub fn db_max_connections(&self) -> u32 {
        limits::DB_MAX_CONNECTIONS
    }

    /// Whether a Gemini API key is configured
    #[must_use]
    pub fn has_gemini_key(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}
