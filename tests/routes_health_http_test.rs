// ABOUTME: HTTP integration tests for health endpoints and full-router assembly
// ABOUTME: Covers the banner, liveness, readiness states, and CORS behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for health routes and the assembled router
//!
//! The assembled router (`server::router`) is exercised here so CORS and
//! cross-module route registration are covered in one place.

mod common;
mod helpers;

use common::ScriptedProvider;
use evergain_server::server;
use helpers::axum_test::TestRequest;
use serde_json::json;

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn test_index_banner() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    let response = TestRequest::get("/").send(server::router(resources)).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "EverGain Backend is running!");
}

#[tokio::test]
async fn test_health_endpoint() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    let response = TestRequest::get("/api/health")
        .send(server::router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "evergain-server");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_with_live_database() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    let response = TestRequest::get("/api/ready")
        .send(server::router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_endpoint_after_pool_close() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    resources.database.close().await;

    let response = TestRequest::get("/api/ready")
        .send(server::router(resources))
        .await;

    assert_eq!(response.status(), 503);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

// ============================================================================
// Router assembly & CORS
// ============================================================================

#[tokio::test]
async fn test_router_merges_all_route_modules() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");
    let app = server::router(resources);

    let endpoints = [
        ("GET", "/"),
        ("GET", "/api/health"),
        ("GET", "/api/ready"),
        ("POST", "/api/auth/register"),
        ("POST", "/api/auth/login"),
        ("POST", "/api/workouts"),
        ("GET", "/api/workouts"),
    ];

    for (method, endpoint) in endpoints {
        let response = if method == "POST" {
            TestRequest::post(endpoint)
                .json(&json!({}))
                .send(app.clone())
                .await
        } else {
            TestRequest::get(endpoint).send(app.clone()).await
        };

        assert_ne!(
            response.status(),
            404,
            "{method} {endpoint} should be registered"
        );
        assert_ne!(
            response.status(),
            405,
            "{method} {endpoint} should allow the method"
        );
    }
}

#[tokio::test]
async fn test_cors_preflight_for_workout_submission() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    let response = TestRequest::options("/api/workouts")
        .header("origin", "http://localhost:19006")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,authorization")
        .send(server::router(resources))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));

    let allowed_methods = response
        .header("access-control-allow-methods")
        .unwrap_or_default();
    assert!(allowed_methods.contains("POST"), "got: {allowed_methods}");

    let allowed_headers = response
        .header("access-control-allow-headers")
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let resources = common::create_test_resources(ScriptedProvider::empty())
        .await
        .expect("Setup failed");

    let response = TestRequest::get("/api/health")
        .header("origin", "https://app.evergain.com")
        .send(server::router(resources))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
