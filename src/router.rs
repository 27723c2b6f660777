use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_app, metrics_middleware};
use crate::modules::auth::router::init_auth_router;
use crate::modules::health::health_check;
use crate::modules::registration::router::init_registration_router;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router. `/metrics` is mounted only when a
/// Prometheus handle is supplied.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest(
            "/api/v1",
            Router::new()
                .merge(init_registration_router())
                .nest("/auth", init_auth_router()),
        )
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.merge(metrics_app(handle));
    }

    router
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
