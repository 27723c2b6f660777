use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Context;
use dotenvy::dotenv;
use signet::logging::init_tracing;
use signet::metrics::init_metrics;
use signet::router::init_router;
use signet::signet_config::AppConfig;
use signet::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // Held until exit so the file writer flushes
    let _log_guard = match init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration, refusing to start");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let metrics_handle =
        init_metrics(config.server.metrics_enabled).context("failed to install metrics recorder")?;
    let state = init_app_state(&config).await?;
    let app = init_router(state, metrics_handle);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        backend = ?config.server.storage_backend,
        token_ttl_seconds = config.jwt.access_token_ttl.num_seconds(),
        "Server running"
    );
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        // Keep serving rather than shutting down immediately
        std::future::pending::<()>().await;
    }
}
