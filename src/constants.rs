// ABOUTME: Application constants organized by domain (colors, analysis, limits, env vars)
// ABOUTME: Single source of truth for fallback values and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Constants module
//!
//! Constants are grouped into logical domains rather than scattered through
//! the code. Values that must stay in sync with the coaching prompt (the
//! color legend in particular) live here so the prompt builder and the
//! fallback policy share one definition.

/// Color palette ("Smart Growth Noir") used by the coaching prompt and the UI
pub mod colors {
    /// Progress up / success / good overload
    pub const LIME_GREEN: &str = "#C6FF5E";
    /// Stagnant / maintenance / needs optimization
    pub const ELECTRIC_BLUE: &str = "#00D1FF";
    /// Unsafe / ego lifting / injury risk
    pub const RED: &str = "#FF5E5E";
    /// Neutral off-white applied when analysis is unavailable
    pub const FALLBACK_NEUTRAL: &str = "#E0E0E0";
}

/// Fixed values applied when the analysis path fails
pub mod fallback {
    /// Advice stored on the session when no analysis result is available
    pub const ADVICE: &str = "Recorded. Keep pushing!";
}

/// History window sizes for the orchestration and the history endpoint
pub mod limits {
    /// Number of recent sessions fed into the analysis prompt
    pub const ANALYSIS_HISTORY: i64 = 5;
    /// Number of sessions returned by the history endpoint
    pub const HISTORY_PAGE: i64 = 20;
    /// Maximum concurrent database connections
    pub const DB_MAX_CONNECTIONS: u32 = 10;
    /// Minimum accepted password length at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// SQLite database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HS256 signing secret for session tokens (required)
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Gemini API key (empty disables live analysis)
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Log level (error/warn/info/debug/trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Deployment environment (development/production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Outer deadline on a single analysis call, in seconds
    pub const ANALYSIS_TIMEOUT_SECS: &str = "ANALYSIS_TIMEOUT_SECS";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8080;
    /// Default SQLite database URL
    pub const DATABASE_URL: &str = "sqlite:./evergain.db";
    /// Default Gemini model
    pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
    /// Default outer deadline on a single analysis call, in seconds
    pub const ANALYSIS_TIMEOUT_SECS: u64 = 30;
    /// Token validity window, in hours
    pub const JWT_EXPIRY_HOURS: i64 = 72;
    /// Whole-request timeout applied by the HTTP layer, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Service identity used in logs and the health endpoint
pub mod service {
    /// Service name
    pub const NAME: &str = "evergain-server";
}
