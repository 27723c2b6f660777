use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::register_user;

pub fn init_registration_router() -> Router<AppState> {
    Router::new().route("/registration", post(register_user))
}
