// ABOUTME: Account service: registration with bcrypt hashing and uniform-error login
// ABOUTME: Issues HS256 session tokens through the auth manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::AuthManager;
use crate::constants::limits;
use crate::database::UserStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

/// Account registration and login
pub struct AuthService {
    users: UserStore,
    auth_manager: Arc<AuthManager>,
}

impl AuthService {
    /// Create a new auth service
    #[must_use]
    pub const fn new(users: UserStore, auth_manager: Arc<AuthManager>) -> Self {
        Self { users, auth_manager }
    }

    /// Register a new account and return a signed session token
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email format is invalid
    /// - Password is too short
    /// - The email is already registered
    /// - Database operation fails
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        info!("User registration attempt for email: {}", request.email);

        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }

        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {} characters",
                limits::MIN_PASSWORD_LENGTH
            )));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::already_exists("email already registered"));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let user = self
            .users
            .create(&request.full_name, &request.email, &password_hash)
            .await?;
        let token = self.auth_manager.generate_token(&user)?;

        info!("User registered successfully: {} ({})", user.email, user.id);

        Ok(AuthResponse { token, user })
    }

    /// Verify credentials and return a signed session token
    ///
    /// Unknown email and wrong password report the same error so callers
    /// cannot enumerate accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not match or a database
    /// operation fails.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        info!("User login attempt for email: {}", request.email);

        let Some(user) = self.users.find_by_email(&request.email).await? else {
            warn!("Login attempt for unknown email: {}", request.email);
            return Err(Self::invalid_credentials());
        };

        let verified = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))?;
        if !verified {
            warn!("Invalid password for user: {}", request.email);
            return Err(Self::invalid_credentials());
        }

        let token = self.auth_manager.generate_token(&user)?;

        info!("User logged in successfully: {} ({})", user.email, user.id);

        Ok(AuthResponse { token, user })
    }

    /// Validate email format
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        // Simple email validation
        if email.len() <= 5 {
            return false;
        }
        let Some(at_pos) = email.find('@') else {
            return false;
        };
        if at_pos == 0 || at_pos == email.len() - 1 {
            return false; // @ at start or end
        }
        let domain_part = &email[at_pos + 1..];
        domain_part.contains('.')
    }

    /// Validate password length
    #[must_use]
    pub const fn is_valid_password(password: &str) -> bool {
        password.len() >= limits::MIN_PASSWORD_LENGTH
    }

    fn invalid_credentials() -> AppError {
        AppError::auth_invalid("Invalid email or password")
    }
}
