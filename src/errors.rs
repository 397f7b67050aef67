// ABOUTME: Unified application error type with machine-readable codes and HTTP mapping
// ABOUTME: Defines ErrorCode, AppError, convenience constructors, and the JSON error response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! # Unified Error Handling
//!
//! Centralized error handling for the EverGain server. Every error that can
//! reach an HTTP response carries an [`ErrorCode`] that maps to a status and
//! serializes as a stable machine-readable string. Handlers return
//! [`AppError`] directly; the [`IntoResponse`] impl renders the standard
//! `{ "error": { "code", "message" } }` body.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable codes carried by every [`AppError`]
///
/// The serialized form is part of the API contract; clients branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// No credentials were supplied where some are required
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired,
    /// Credentials or token failed verification
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid,
    /// Token was once valid but its expiry has passed
    #[serde(rename = "AUTH_EXPIRED")]
    AuthExpired,

    /// Request payload failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A required field is absent from the payload
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,

    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A resource with the same identity already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,

    /// An upstream service failed or misbehaved
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,

    /// Server configuration is invalid or incomplete
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,

    /// Unclassified internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
    /// A database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
}

impl ErrorCode {
    /// HTTP status this code maps to
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::AuthRequired | Self::AuthInvalid => 401,
            Self::AuthExpired => 403,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::ExternalServiceError => 502,
            Self::ConfigError | Self::InternalError | Self::DatabaseError => 500,
        }
    }

    /// Short human phrasing, used as the `Display` prefix of [`AppError`]
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::AuthExpired => "The authentication token has expired",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Application error: a code, a detail message, and an optional cause
#[derive(Debug, Error)]
pub struct AppError {
    /// Classification that decides status and wire code
    pub code: ErrorCode,
    /// Detail message rendered into logs and response bodies
    pub message: String,
    /// Underlying cause, when one exists
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Build an error from a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status derived from the error code
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Missing credentials
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Authentication required")
    }

    /// Credentials or token rejected
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Payload failed validation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Named resource does not exist
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Identity collision on create
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Unclassified internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Failed database operation
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Invalid or incomplete configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Upstream service failure, prefixed with the service name
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}

/// Shorthand result used across services and routes
pub type AppResult<T> = Result<T, AppError>;

/// JSON body rendered for every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The single `error` envelope clients unwrap
    pub error: ErrorDetail,
}

/// Code and message inside the error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable code, stable across releases
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorDetail {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::from(self);
        (status, Json(body)).into_response()
    }
}
