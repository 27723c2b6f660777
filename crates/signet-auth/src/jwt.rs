//! Issuing and validating access tokens.
//!
//! Tokens are compact JWS strings signed with HMAC-SHA-256. Validation is
//! ordered: structure and signature first, then expiry, then subject. The
//! first failing check decides the [`TokenError`] that is returned.
//!
//! Every time-dependent operation has an `_at` variant that takes the current
//! time explicitly. The plain variants call it with [`Utc::now`].

use chrono::{DateTime, Duration, Utc};
use data_encoding::BASE64URL_NOPAD;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use signet_config::{JwtConfig, SigningKey};

use crate::claims::{Claims, ExtraClaims, RESERVED_CLAIMS};
use crate::error::TokenError;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and validates HS256 access tokens with a single process-wide key.
///
/// Holds only immutable key material, so one instance is shared behind an
/// `Arc` by every request.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &ALGORITHM)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self::with_key(&config.signing_key, config.access_token_ttl)
    }

    pub fn with_key(key: &SigningKey, default_ttl: Duration) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is compared against the caller's clock in `validate_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
            default_ttl,
        }
    }

    /// Lifetime used by [`TokenService::issue_default`].
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issues a token for `subject` that expires `ttl` from now.
    ///
    /// # Errors
    ///
    /// - [`TokenError::EmptySubject`] if `subject` is blank
    /// - [`TokenError::InvalidTtl`] if `ttl` is zero or negative
    /// - [`TokenError::ReservedClaim`] if `extra_claims` names a registered claim
    pub fn issue(
        &self,
        subject: &str,
        extra_claims: ExtraClaims,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_at(subject, extra_claims, ttl, Utc::now())
    }

    /// Issues a token with the configured lifetime.
    pub fn issue_default(
        &self,
        subject: &str,
        extra_claims: ExtraClaims,
    ) -> Result<String, TokenError> {
        self.issue(subject, extra_claims, self.default_ttl)
    }

    pub fn issue_at(
        &self,
        subject: &str,
        extra_claims: ExtraClaims,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::EmptySubject);
        }
        // Claims carry whole seconds, so a sub-second ttl would expire on issue.
        if ttl.num_seconds() <= 0 {
            return Err(TokenError::InvalidTtl);
        }
        if let Some(key) = extra_claims
            .keys()
            .find(|key| RESERVED_CLAIMS.contains(&key.as_str()))
        {
            return Err(TokenError::ReservedClaim(key.clone()));
        }

        let iat = now.timestamp();
        let exp = iat
            .checked_add(ttl.num_seconds())
            .ok_or(TokenError::InvalidTtl)?;

        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp,
            extra: extra_claims,
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Validates `token` and checks that it was issued to `expected_subject`.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidSignature`] for a bad signature or any algorithm other than HS256
    /// - [`TokenError::Malformed`] for a token that cannot be parsed or lacks `sub`, `iat` or `exp`
    /// - [`TokenError::Expired`] once `exp` is not after the current time
    /// - [`TokenError::SubjectMismatch`] if the subject differs
    pub fn validate(&self, token: &str, expected_subject: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, expected_subject, Utc::now())
    }

    pub fn validate_at(
        &self,
        token: &str,
        expected_subject: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let claims = self.verify_at(token, now)?;
        if claims.sub != expected_subject {
            return Err(TokenError::SubjectMismatch);
        }
        Ok(claims)
    }

    /// Verifies `token` and projects one value out of its claims.
    ///
    /// Signature and expiry are checked exactly as in [`TokenService::validate`];
    /// only the subject comparison is skipped.
    ///
    /// ```ignore
    /// let email = tokens.extract_claim(&token, |c| c.sub.clone())?;
    /// ```
    pub fn extract_claim<T, F>(&self, token: &str, selector: F) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> T,
    {
        self.extract_claim_at(token, selector, Utc::now())
    }

    pub fn extract_claim_at<T, F>(
        &self,
        token: &str,
        selector: F,
        now: DateTime<Utc>,
    ) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> T,
    {
        let claims = self.verify_at(token, now)?;
        Ok(selector(&claims))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        check_header_algorithm(token)?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        if data.claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

/// Rejects any token whose header does not name HS256, or whose signature
/// segment is not canonical base64url.
///
/// jsonwebtoken cannot deserialize a header naming `none`, which would surface
/// as a parse error. Reading `alg` ourselves reports it as a signature failure
/// like every other foreign algorithm. An altered signature character is a
/// signature failure too, even when it only changes the unused trailing bits.
fn check_header_algorithm(token: &str) -> Result<(), TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed(
            "expected three dot-separated segments".into(),
        ));
    };

    let bytes = BASE64URL_NOPAD
        .decode(header.as_bytes())
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {e}")))?;
    let header: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not JSON: {e}")))?;

    match header.get("alg").and_then(|alg| alg.as_str()) {
        Some("HS256") => {}
        Some(_) => return Err(TokenError::InvalidSignature),
        None => return Err(TokenError::Malformed("header has no algorithm".into())),
    }

    BASE64URL_NOPAD
        .decode(signature.as_bytes())
        .map(|_| ())
        .map_err(|_| TokenError::InvalidSignature)
}
