use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use signet_core::AppError;
use signet_models::User;

use crate::metrics::track_token_validation_failure;
use crate::modules::auth::error::UNAUTHORIZED_MESSAGE;
use crate::state::AppState;

/// Extractor that resolves `Authorization: Bearer <token>` to the user it was
/// issued to. Any failure is a 401 with the same body.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Pulls the token out of an `Authorization` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| {
                tracing::warn!("Rejected request: missing or malformed authorization header");
                track_token_validation_failure("missing_header");
                AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE))
            })?;

        let user = state.auth.authenticate_bearer(token).await?;

        Ok(AuthUser(user))
    }
}
