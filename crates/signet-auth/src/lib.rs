//! # Signet Auth
//!
//! Signed bearer tokens for the Signet API.
//!
//! This crate provides:
//!
//! - [`claims`]: the token payload, a subject plus optional extra claims
//! - [`jwt`]: [`TokenService`], which issues and validates HS256 tokens
//! - [`error`]: [`TokenError`], the classification of a rejected token
//!
//! Tokens are stateless. There is no revocation: a token is good until its
//! `exp` passes or the signing key changes.
//!
//! # Example
//!
//! ```ignore
//! use signet_auth::TokenService;
//! use signet_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env()?);
//!
//! let token = tokens.issue_default("alice@example.com", Default::default())?;
//! let claims = tokens.validate(&token, "alice@example.com")?;
//! assert_eq!(claims.subject(), "alice@example.com");
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, ExtraClaims, RESERVED_CLAIMS};
pub use error::TokenError;
pub use jwt::TokenService;
