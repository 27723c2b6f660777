//! # Signet Core
//!
//! Core types shared by every Signet crate.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] with `IntoResponse` conversion
//! - [`password`]: the [`PasswordHasher`] seam and its bcrypt implementation
//!
//! # Example
//!
//! ```ignore
//! use signet_core::password::{BcryptHasher, PasswordHasher};
//!
//! let hasher = BcryptHasher::default();
//! let hash = hasher.hash("correct horse battery staple")?;
//! assert!(hasher.verify("correct horse battery staple", &hash)?);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{BcryptHasher, HashError, MAX_PASSWORD_BYTES, PasswordHasher};
