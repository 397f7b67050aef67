// ABOUTME: In-process HTTP driver for exercising axum routers in integration tests
// ABOUTME: Sends requests through tower::ServiceExt::oneshot, no socket involved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

/// Request under construction; `send` drives it through the router
pub struct TestRequest {
    builder: axum::http::request::Builder,
    body: Vec<u8>,
}

impl TestRequest {
    fn with_method(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Vec::new(),
        }
    }

    /// Start a GET request
    pub fn get(uri: &str) -> Self {
        Self::with_method(Method::GET, uri)
    }

    /// Start a POST request
    pub fn post(uri: &str) -> Self {
        Self::with_method(Method::POST, uri)
    }

    /// Start an OPTIONS request (CORS preflight)
    #[allow(dead_code)]
    pub fn options(uri: &str) -> Self {
        Self::with_method(Method::OPTIONS, uri)
    }

    /// Set a request header
    #[allow(dead_code)]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Serialize `data` as the JSON request body
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        self.body = serde_json::to_vec(data).expect("Failed to serialize JSON");
        self.builder = self.builder.header(header::CONTENT_TYPE, "application/json");
        self
    }

    /// Set a literal body with an explicit content type
    #[allow(dead_code)]
    pub fn raw_body(mut self, content_type: &str, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self.builder = self.builder.header(header::CONTENT_TYPE, content_type);
        self
    }

    /// Run the request through `app` and collect the full response
    pub async fn send(self, app: Router) -> TestResponse {
        let request = self
            .builder
            .body(Body::from(self.body))
            .expect("Failed to build request");

        let response = app
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Fully-buffered response: status, headers, and body bytes
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    /// Status code as u16 for easy assertion
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Header value as a string, if present and valid UTF-8
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to deserialize JSON response")
    }

    /// Body as a UTF-8 string
    #[allow(dead_code)]
    pub fn text(self) -> String {
        String::from_utf8(self.body).expect("Failed to decode response as UTF-8")
    }
}
