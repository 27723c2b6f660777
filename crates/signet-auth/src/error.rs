use thiserror::Error;

/// Why a token could not be issued or was not accepted.
///
/// Callers at the HTTP boundary must collapse every variant into a single
/// unauthorized response. The variants exist for logs and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token subject does not match")]
    SubjectMismatch,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("claim '{0}' is reserved and cannot be set as an extra claim")]
    ReservedClaim(String),

    #[error("token lifetime must be positive")]
    InvalidTtl,

    #[error("token subject must not be empty")]
    EmptySubject,

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

impl TokenError {
    /// Short label used as a metrics dimension and log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Expired => "expired",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::SubjectMismatch => "subject_mismatch",
            TokenError::Malformed(_) => "malformed",
            TokenError::ReservedClaim(_) => "reserved_claim",
            TokenError::InvalidTtl => "invalid_ttl",
            TokenError::EmptySubject => "empty_subject",
            TokenError::Encoding(_) => "encoding",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}
