// ABOUTME: CORS configuration for the EverGain HTTP API
// ABOUTME: Permissive any-origin policy so the mobile app works from any dev host
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use std::time::Duration;

use http::{header::HeaderName, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the server
///
/// Any origin is allowed: the API is consumed by a mobile app running on
/// simulators, devices, and tunnels during development, so origin pinning
/// buys nothing here.
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([
            HeaderName::from_static("accept"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-csrf-token"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(300))
}
