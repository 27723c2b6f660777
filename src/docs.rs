use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use signet_models::{
    Confirmation, ErrorResponse, HealthResponse, LoginRequest, LoginResponse, RegisterRequest,
    User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::registration::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_current_user,
        crate::modules::health::health_check,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            Confirmation,
            LoginRequest,
            LoginResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Registration", description = "Account registration"),
        (name = "Authentication", description = "Login and bearer token endpoints"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "Signet API",
        version = "0.1.0",
        description = "User registration and stateless bearer-token authentication built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
