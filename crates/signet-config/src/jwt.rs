//! Token signing configuration.

use std::fmt;

use chrono::Duration;
use data_encoding::{BASE64, HEXLOWER_PERMISSIVE};

use crate::{ConfigError, required};

/// Smallest HMAC-SHA-256 key we accept, in bytes.
pub const MIN_SIGNING_KEY_BYTES: usize = 32;

/// How `JWT_SECRET` is written in the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyEncoding {
    /// The UTF-8 bytes of the variable are the key.
    #[default]
    Raw,
    Base64,
    Hex,
}

impl KeyEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyEncoding::Raw => "raw",
            KeyEncoding::Base64 => "base64",
            KeyEncoding::Hex => "hex",
        }
    }
}

impl std::str::FromStr for KeyEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(KeyEncoding::Raw),
            "base64" => Ok(KeyEncoding::Base64),
            "hex" => Ok(KeyEncoding::Hex),
            other => Err(format!("unknown key encoding '{other}', expected raw, base64 or hex")),
        }
    }
}

/// Symmetric secret used to sign and verify access tokens.
///
/// Construction enforces [`MIN_SIGNING_KEY_BYTES`]. The bytes never appear in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let bytes = bytes.into();
        if bytes.len() < MIN_SIGNING_KEY_BYTES {
            return Err(ConfigError::SigningKeyTooShort {
                actual: bytes.len(),
                min: MIN_SIGNING_KEY_BYTES,
            });
        }
        Ok(Self(bytes))
    }

    pub fn decode(material: &str, encoding: KeyEncoding) -> Result<Self, ConfigError> {
        let material = material.trim();
        let bytes = match encoding {
            KeyEncoding::Raw => material.as_bytes().to_vec(),
            KeyEncoding::Base64 => BASE64.decode(material.as_bytes()).map_err(|e| {
                ConfigError::InvalidKeyEncoding {
                    encoding: encoding.as_str(),
                    reason: e.to_string(),
                }
            })?,
            KeyEncoding::Hex => HEXLOWER_PERMISSIVE
                .decode(material.as_bytes())
                .map_err(|e| ConfigError::InvalidKeyEncoding {
                    encoding: encoding.as_str(),
                    reason: e.to_string(),
                })?,
        };
        Self::from_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey([REDACTED; {} bytes])", self.0.len())
    }
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub signing_key: SigningKey,
    pub access_token_ttl: Duration,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let encoding = match lookup("JWT_SECRET_ENCODING") {
            Some(raw) => raw
                .parse::<KeyEncoding>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "JWT_SECRET_ENCODING",
                    reason,
                })?,
            None => KeyEncoding::default(),
        };
        let signing_key = SigningKey::decode(&required(lookup, "JWT_SECRET")?, encoding)?;

        let ttl_raw = required(lookup, "JWT_ACCESS_TTL_SECONDS")?;
        let ttl_seconds: i64 = ttl_raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                var: "JWT_ACCESS_TTL_SECONDS",
                reason: e.to_string(),
            })?;
        if ttl_seconds <= 0 {
            return Err(ConfigError::InvalidValue {
                var: "JWT_ACCESS_TTL_SECONDS",
                reason: format!("must be positive, got {ttl_seconds}"),
            });
        }

        Ok(Self {
            signing_key,
            access_token_ttl: Duration::seconds(ttl_seconds),
        })
    }
}
