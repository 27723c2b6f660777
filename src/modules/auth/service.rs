//! Registration, login and bearer-token authorization.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use chrono::Duration;
use signet_auth::{ExtraClaims, TokenError, TokenService};
use signet_config::PasswordPolicy;
use signet_core::{HashError, PasswordHasher};
use signet_models::{Confirmation, Email, NewUser, User};
use tracing::{info, instrument, warn};

use super::error::{AuthError, RegistrationError};
use crate::metrics::{
    track_login_failure, track_login_success, track_token_issued, track_token_validation_failure,
    track_user_registered,
};
use crate::store::CredentialStore;

/// Input for the constant-time miss path. Never a real user's password.
const DUMMY_PASSWORD: &str = "signet-dummy-password-for-unknown-accounts";

pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
    policy: PasswordPolicy,
    /// Verified against when the email is unknown, so a miss costs the same
    /// bcrypt time as a wrong password.
    dummy_hash: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("tokens", &self.tokens)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Wires the service from its collaborators.
    ///
    /// Hashes a dummy password once with `hasher`, so this fails only if the
    /// hasher itself is misconfigured (for example an out-of-range bcrypt cost).
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
        policy: PasswordPolicy,
    ) -> Result<Self, HashError> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;
        Ok(Self {
            store,
            hasher,
            tokens,
            policy,
            dummy_hash,
        })
    }

    /// Lifetime of the tokens issued by [`AuthService::authenticate`].
    pub fn access_token_ttl(&self) -> Duration {
        self.tokens.default_ttl()
    }

    #[instrument(skip(self, first_name, last_name, password), fields(email = %email))]
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Confirmation, RegistrationError> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(RegistrationError::InvalidName("first_name"));
        }
        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(RegistrationError::InvalidName("last_name"));
        }

        let email =
            Email::new(email).map_err(|e| RegistrationError::InvalidEmail(e.to_string()))?;
        self.policy.check(password)?;

        if self.store.exists_by_email(&email).await? {
            return Err(RegistrationError::DuplicateEmail);
        }

        let password_hash = self.hash_blocking(password).await?;

        // The store re-checks uniqueness atomically; a racing registration
        // surfaces here as DuplicateEmail.
        let record = self
            .store
            .save(NewUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                password_hash,
            })
            .await?;

        track_user_registered();
        info!(user_id = %record.id, "User registered");

        Ok(Confirmation {
            id: record.id,
            email: record.email,
            message: "Registration successful".to_string(),
        })
    }

    /// Verifies the credentials and issues an access token for the normalized email.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.authenticate_with_claims(email, password, ExtraClaims::new())
            .await
    }

    /// Same as [`AuthService::authenticate`], with `extra_claims` merged into the token.
    #[instrument(skip(self, password, extra_claims), fields(email = %email))]
    pub async fn authenticate_with_claims(
        &self,
        email: &str,
        password: &str,
        extra_claims: ExtraClaims,
    ) -> Result<String, AuthError> {
        let record = match Email::new(email) {
            Ok(email) => self.store.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(record) = record else {
            if let Err(e) = self
                .verify_blocking(password, self.dummy_hash.clone())
                .await
            {
                warn!(error = ?e, "Dummy password verification failed");
            }
            track_login_failure("unknown_email");
            warn!("Login failed: no account for email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .verify_blocking(password, record.password_hash.clone())
            .await?
        {
            track_login_failure("wrong_password");
            warn!(user_id = %record.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue_default(record.email.as_str(), extra_claims)
            .map_err(|e| anyhow!(e).context("failed to issue access token"))?;

        track_token_issued();
        track_login_success();
        info!(user_id = %record.id, "User logged in");

        Ok(token)
    }

    /// Accepts `token` only if it is valid right now and was issued to `claimed_email`.
    ///
    /// Every rejection is [`AuthError::Unauthorized`]. The precise reason is
    /// logged and counted, never returned.
    pub fn authorize_request(&self, token: &str, claimed_email: &str) -> Result<(), AuthError> {
        let claimed = Email::normalize(claimed_email);
        self.tokens
            .validate(token, &claimed)
            .map(|_| ())
            .map_err(|e| token_rejected(&e))
    }

    /// Resolves a bearer token to its user.
    ///
    /// The subject is read from the verified token, the account is loaded by
    /// that email, and the token is then authorized against the stored email.
    #[instrument(skip_all)]
    pub async fn authenticate_bearer(&self, token: &str) -> Result<User, AuthError> {
        let subject = self
            .tokens
            .extract_claim(token, |claims| claims.sub.clone())
            .map_err(|e| token_rejected(&e))?;

        let email = Email::new(&subject).map_err(|_| {
            token_rejected(&TokenError::Malformed("subject is not an email".into()))
        })?;

        let Some(record) = self.store.find_by_email(&email).await? else {
            warn!("Rejected bearer token: subject has no account");
            track_token_validation_failure("unknown_subject");
            return Err(AuthError::Unauthorized);
        };

        self.authorize_request(token, record.email.as_str())?;
        Ok(User::from(record))
    }

    async fn hash_blocking(&self, password: &str) -> anyhow::Result<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .context("password hashing task failed")??;
        Ok(hash)
    }

    async fn verify_blocking(&self, password: &str, hash: String) -> anyhow::Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .context("password verification task failed")??;
        Ok(matches)
    }
}

fn token_rejected(err: &TokenError) -> AuthError {
    warn!(reason = err.kind(), error = %err, "Rejected bearer token");
    track_token_validation_failure(err.kind());
    AuthError::Unauthorized
}
