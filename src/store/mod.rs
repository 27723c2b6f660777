//! Credential storage.
//!
//! The auth flow talks to storage only through [`CredentialStore`]. Two
//! implementations ship: [`PgCredentialStore`] for production and
//! [`InMemoryCredentialStore`] for tests and `STORAGE_BACKEND=memory`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use signet_models::{Email, NewUser, UserRecord};
use thiserror::Error;

pub use memory::InMemoryCredentialStore;
pub use postgres::PgCredentialStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("credential store failure: {0}")]
    Backend(#[from] anyhow::Error),
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool, StoreError>;

    /// Inserts `user` unless the email is taken. The check and the insert are
    /// one atomic step, so concurrent registrations for the same email yield
    /// exactly one success and [`StoreError::DuplicateEmail`] for the rest.
    async fn save(&self, user: NewUser) -> Result<UserRecord, StoreError>;
}
