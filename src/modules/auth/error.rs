use anyhow::anyhow;
use signet_config::PolicyViolation;
use signet_core::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Fixed body for every rejected bearer token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Fixed body for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0} must not be empty")]
    InvalidName(&'static str),

    #[error("{0}")]
    InvalidEmail(String),

    #[error(transparent)]
    WeakPassword(#[from] PolicyViolation),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => RegistrationError::DuplicateEmail,
            StoreError::Backend(inner) => RegistrationError::Internal(inner),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Internal(anyhow!(err))
    }
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::InvalidName(_)
            | RegistrationError::InvalidEmail(_)
            | RegistrationError::WeakPassword(_) => AppError::unprocessable(anyhow!(err)),
            RegistrationError::DuplicateEmail => AppError::conflict(anyhow!(err)),
            RegistrationError::Internal(inner) => AppError::internal(inner),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::unauthorized(anyhow!(INVALID_CREDENTIALS_MESSAGE))
            }
            AuthError::Unauthorized => AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE)),
            AuthError::Internal(inner) => AppError::internal(inner),
        }
    }
}
