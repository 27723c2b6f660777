use thiserror::Error;

/// Startup configuration failure. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("signing key is {actual} bytes, at least {min} bytes are required for HMAC-SHA-256")]
    SigningKeyTooShort { actual: usize, min: usize },

    #[error("signing key could not be decoded as {encoding}: {reason}")]
    InvalidKeyEncoding {
        encoding: &'static str,
        reason: String,
    },
}
