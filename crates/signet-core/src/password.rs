//! Password hashing.
//!
//! The auth flow only sees the [`PasswordHasher`] trait; [`BcryptHasher`] is
//! the production implementation. Hashing is CPU-bound, so async
//! callers should run it on a blocking thread.

use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, non_truncating_verify};
use thiserror::Error;

/// Longest password bcrypt hashes in full. Its 72-byte input block also holds
/// a terminating NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Failure inside the hashing primitive (bad cost, corrupt stored hash,
/// input longer than [`MAX_PASSWORD_BYTES`]).
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(#[from] BcryptError);

/// One-way adaptive salted password hash.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Returns `Ok(false)` on mismatch. `Err` means the stored hash is unusable.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;
}

/// bcrypt with a configurable work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        Ok(non_truncating_hash(plaintext, self.cost)?)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        match non_truncating_verify(plaintext, hash) {
            // No stored hash was made from an over-long input
            Err(BcryptError::Truncation(_)) => Ok(false),
            other => Ok(other?),
        }
    }
}
