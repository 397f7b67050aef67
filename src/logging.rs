// ABOUTME: Structured logging setup built on tracing and tracing-subscriber
// ABOUTME: Applies the configured level with RUST_LOG override and dependency noise reduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Logging initialization
//!
//! One fmt subscriber per process. `RUST_LOG` takes precedence over the
//! configured level; dependency noise (hyper, reqwest, sqlx) is capped
//! regardless so application logs stay readable at debug level.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing::{info, Level};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::constants::service;

/// Initialize the global tracing subscriber from server configuration
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init(config: &ServerConfig) -> Result<()> {
    let base_level = config.log_level.to_string();

    let env_filter = env::var("RUST_LOG")
        .map_or_else(|_| EnvFilter::new(&base_level), EnvFilter::new)
        .add_directive("hyper=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
        .add_directive(
            "reqwest=warn"
                .parse()
                .unwrap_or_else(|_| Level::WARN.into()),
        )
        .add_directive("sqlx=warn".parse().unwrap_or_else(|_| Level::WARN.into()))
        .add_directive(
            "tower_http=info"
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        )
        .add_directive(
            format!("evergain_server={base_level}")
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        );

    // Production deployments get source locations for faster triage
    let include_location = config.environment.is_production();

    let fmt_layer = fmt::layer()
        .with_file(include_location)
        .with_line_number(include_location)
        .with_target(true)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    info!(
        service.name = service::NAME,
        service.version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        log.level = %config.log_level,
        "Logging initialized"
    );

    Ok(())
}
