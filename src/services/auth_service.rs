//! Domain service for registration and login.
//!
//! Sits between the page handlers and the store so the form rules (confirmation,
//! required fields) live in one place.

use thiserror::Error;

use crate::db::{RegisterOutcome, User};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a regular (non-admin) account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordMismatch`] when `confirm` differs from `password`
    /// and [`AuthError::Validation`] for an empty username or password.
    async fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<RegisterOutcome, AuthError>;

    /// Verifies credentials and returns the stored user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no user matches exactly.
    async fn login(&self, username: &str, password: &str) -> Result<User, AuthError>;
}
