// ABOUTME: JWT session token management with HS256 signing and detailed validation errors
// ABOUTME: AuthManager issues and validates user tokens; the secret is injected, never compiled in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Authentication token management
//!
//! [`AuthManager`] issues HS256 JWTs for registered users and validates
//! presented tokens. The signing secret comes from configuration at startup;
//! there is no built-in default.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::User;

/// JWT validation error with detailed information
#[derive(Debug, Clone, Error)]
pub enum JwtValidationError {
    /// Token was valid once but has expired
    #[error("JWT token expired at {expired_at}")]
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature is invalid
    #[error("JWT token signature is invalid: {reason}")]
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper JWT format)
    #[error("JWT token is malformed: {details}")]
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl From<JwtValidationError> for AppError {
    fn from(err: JwtValidationError) -> Self {
        match err {
            JwtValidationError::TokenExpired { .. } => Self::new(
                ErrorCode::AuthExpired,
                "Authentication token has expired",
            ),
            JwtValidationError::TokenInvalid { reason } => Self::auth_invalid(reason),
            JwtValidationError::TokenMalformed { details } => Self::auth_invalid(details),
        }
    }
}

/// JWT claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Issues and validates user session tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .field("secret", &"***")
            .finish()
    }
}

impl AuthManager {
    /// Create a new authentication manager from the configured secret
    #[must_use]
    pub fn new(jwt_secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret),
            decoding_key: DecodingKey::from_secret(jwt_secret),
            token_expiry_hours,
        }
    }

    /// Generate a signed session token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))
    }

    /// Validate a presented token and return its claims
    ///
    /// # Errors
    ///
    /// Returns [`JwtValidationError`] describing whether the token is
    /// expired, tampered with, or not a JWT at all.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let claims = self.decode_claims(token)?;
        Self::check_expiry(&claims)?;

        debug!("Token validated for user {}", claims.sub);
        Ok(claims)
    }

    /// Decode claims without expiration validation so expiry failures can
    /// report when the token expired
    fn decode_claims(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    fn check_expiry(claims: &Claims) -> Result<(), JwtValidationError> {
        let now = Utc::now();
        if now.timestamp() > claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
            warn!(
                "Token expired for user {} at {}",
                claims.sub,
                expired_at.to_rfc3339()
            );
            return Err(JwtValidationError::TokenExpired { expired_at });
        }
        Ok(())
    }

    fn convert_jwt_error(error: &jsonwebtoken::errors::Error) -> JwtValidationError {
        match error.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Signature verification failed".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Not a valid JWT".into(),
            },
            ErrorKind::Base64(e) => JwtValidationError::TokenMalformed {
                details: format!("Invalid base64 encoding: {e}"),
            },
            ErrorKind::Json(e) => JwtValidationError::TokenMalformed {
                details: format!("Invalid claims payload: {e}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: error.to_string(),
            },
        }
    }
}
