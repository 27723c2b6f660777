//! Registration and login DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::value_types::Email;

/// Registration form.
///
/// Only size limits are checked here. Name, email and password rules are
/// enforced by the registration service so every caller gets the same errors.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(max = 100))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(max = 100))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(length(max = 254))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(custom(function = "validate_password_bytes"))]
    #[schema(example = "correct horse battery")]
    pub password: String,
}

/// bcrypt hashes at most 71 bytes in full, and `length` counts characters.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > 71 {
        return Err(ValidationError::new("password_too_long")
            .with_message("password must be at most 71 bytes".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, max = 72))]
    #[schema(example = "correct horse battery")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds.
    #[schema(example = 3600)]
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// Returned by a successful registration. No token is issued at this point.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Confirmation {
    pub id: Uuid,
    pub email: Email,
    #[schema(example = "Registration successful")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid credentials")]
    pub error: String,
}
