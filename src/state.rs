use std::sync::Arc;

use anyhow::Context;
use signet_auth::TokenService;
use signet_config::{AppConfig, StorageBackend};
use signet_core::BcryptHasher;
use signet_db::{init_db_pool, run_migrations};

use crate::modules::auth::AuthService;
use crate::store::{CredentialStore, InMemoryCredentialStore, PgCredentialStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// Builds the credential store for the configured backend.
///
/// For Postgres this connects and applies pending migrations before returning.
pub async fn init_store(config: &AppConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    match config.server.storage_backend {
        StorageBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .context("DATABASE_URL is required for the postgres storage backend")?;
            let pool = init_db_pool(db_config)
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("failed to run database migrations")?;
            Ok(Arc::new(PgCredentialStore::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory credential store; users are lost on restart");
            Ok(Arc::new(InMemoryCredentialStore::new()))
        }
    }
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = init_store(config).await?;
    let hasher = Arc::new(BcryptHasher::new(config.hashing.cost));
    let tokens = Arc::new(TokenService::new(&config.jwt));

    let auth = AuthService::new(store, hasher, tokens, config.password_policy.clone())
        .context("failed to initialize password hasher")?;

    Ok(AppState::new(auth))
}
