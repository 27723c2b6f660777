use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form claims merged into the token payload next to `sub`, `iat` and `exp`.
pub type ExtraClaims = Map<String, Value>;

/// Registered claim names that callers may not supply as extra claims.
pub const RESERVED_CLAIMS: [&str; 7] = ["sub", "iat", "exp", "nbf", "iss", "aud", "jti"];

/// Access token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the normalized email of the user the token was issued to.
    pub sub: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
    #[serde(flatten)]
    pub extra: ExtraClaims,
}

impl Claims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> i64 {
        self.iat
    }

    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    pub fn extra_claim(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
