// ABOUTME: HTTP middleware configuration shared across all routes
// ABOUTME: Currently CORS; request tracing and timeouts come from tower-http layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

pub mod cors;

pub use cors::setup_cors;
