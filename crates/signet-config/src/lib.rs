//! # Signet Config
//!
//! Configuration types for the Signet API, loaded from environment variables.
//!
//! - [`jwt`]: signing key and token lifetime
//! - [`password`]: password strength policy and bcrypt work factor
//! - [`database`]: Postgres connection settings
//! - [`server`]: listen port, credential storage backend and metrics switch
//!
//! Every loader has a `from_env` entry point and a `from_lookup` variant that
//! takes any `Fn(&str) -> Option<String>`, which is what the tests use.
//! Loading fails fast with a [`ConfigError`]: a service with a short or missing
//! signing key must not start.
//!
//! # Example
//!
//! ```ignore
//! use signet_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("token ttl: {}s", config.jwt.access_token_ttl.num_seconds());
//! ```

pub mod database;
pub mod error;
pub mod jwt;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, KeyEncoding, MIN_SIGNING_KEY_BYTES, SigningKey};
pub use password::{MAX_PASSWORD_BYTES, PasswordHashingConfig, PasswordPolicy, PolicyViolation};
pub use server::{ServerConfig, StorageBackend};

/// All startup configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub password_policy: PasswordPolicy,
    pub hashing: PasswordHashingConfig,
    pub server: ServerConfig,
    /// Only present when the storage backend is Postgres.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig::from_lookup(&lookup)?;
        let database = match server.storage_backend {
            StorageBackend::Postgres => Some(DatabaseConfig::from_lookup(&lookup)?),
            StorageBackend::Memory => None,
        };

        Ok(Self {
            jwt: JwtConfig::from_lookup(&lookup)?,
            password_policy: PasswordPolicy::from_lookup(&lookup)?,
            hashing: PasswordHashingConfig::from_lookup(&lookup)?,
            server,
            database,
        })
    }
}

/// Parses an optional variable, falling back to `default` when unset.
pub(crate) fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parses an on/off switch: `true`/`false`, `1`/`0`, `yes`/`no` or `on`/`off`.
pub(crate) fn parse_flag<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            reason: format!("expected true or false, got '{other}'"),
        }),
    }
}

/// Fetches a variable that must be present and non-blank.
pub(crate) fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}
