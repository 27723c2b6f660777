use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use signet_core::AppError;
use signet_models::{Confirmation, ErrorResponse, RegisterRequest};

use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
///
/// No token is issued; the client logs in afterwards.
#[utoipa::path(
    post,
    path = "/api/v1/registration",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = Confirmation),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Invalid name, email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Registration"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<Confirmation>), AppError> {
    let confirmation = state
        .auth
        .register(&dto.first_name, &dto.last_name, &dto.email, &dto.password)
        .await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}
