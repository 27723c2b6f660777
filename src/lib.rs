//! # Signet API
//!
//! A user registration and authentication backend built with Rust, Axum, and
//! PostgreSQL. Users register with a name, email and password, log in to get a
//! short-lived HS256 bearer token, and present that token on later requests.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser bearer-token extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # AuthService, login, current user
//! │   ├── registration/ # Account registration
//! │   └── health/      # Liveness probe
//! └── store/           # CredentialStore trait, Postgres and in-memory stores
//! ```
//!
//! The workspace crates carry everything that has no HTTP in it:
//!
//! - `signet-auth`: token issuance and validation
//! - `signet-config`: environment configuration
//! - `signet-core`: `AppError` and password hashing
//! - `signet-db`: pool and migrations
//! - `signet-models`: entities and DTOs
//!
//! ## Authentication
//!
//! Tokens are stateless and carry the normalized email as `sub`. There is no
//! refresh token and no revocation; a token is valid until `exp`. Every token
//! failure answers 401 with the same body, and the precise reason only shows
//! up in logs and in the `token_validation_failures_total` metric.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=$(openssl rand -hex 32) JWT_SECRET_ENCODING=hex \
//! JWT_ACCESS_TTL_SECONDS=3600 STORAGE_BACKEND=memory cargo run
//! ```
//!
//! API documentation is served at `/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

// Re-export workspace crates for convenience
pub use signet_auth;
pub use signet_config;
pub use signet_core;
pub use signet_db;
pub use signet_models;
