//! # Signet DB
//!
//! Database pool and migrations for the Signet API.
//!
//! # Example
//!
//! ```ignore
//! use signet_config::DatabaseConfig;
//! use signet_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use signet_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

/// Name of the unique constraint on `users.email`.
pub const USERS_EMAIL_UNIQUE: &str = "users_email_key";

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Creates a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be created once at
/// startup and shared through application state.
///
/// # Errors
///
/// Returns the connection error if the database cannot be reached within the
/// acquire timeout. Callers treat this as fatal.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );
    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
