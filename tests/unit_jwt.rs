use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use signet_auth::{ExtraClaims, TokenError, TokenService};
use signet_config::{JwtConfig, KeyEncoding, SigningKey};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        signing_key: SigningKey::decode(
            "746573745f7365637265745f6b65795f666f725f74657374696e675f707572706f736573",
            KeyEncoding::Hex,
        )
        .unwrap(),
        access_token_ttl: Duration::seconds(3600),
    }
}

fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

#[test]
fn test_issue_and_validate_alice() {
    let tokens = TokenService::new(&get_test_jwt_config());
    let token = tokens
        .issue_at(
            "alice@example.com",
            ExtraClaims::new(),
            Duration::seconds(3600),
            issued_at(),
        )
        .unwrap();

    assert_eq!(token.split('.').count(), 3);

    let claims = tokens
        .validate_at(&token, "alice@example.com", issued_at())
        .unwrap();
    assert_eq!(claims.sub, "alice@example.com");

    let later = issued_at() + Duration::seconds(3601);
    assert_eq!(
        tokens.validate_at(&token, "alice@example.com", later),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_issue_default_uses_configured_ttl() {
    let tokens = TokenService::new(&get_test_jwt_config());
    let token = tokens
        .issue_default("alice@example.com", ExtraClaims::new())
        .unwrap();

    let claims = tokens.validate(&token, "alice@example.com").unwrap();
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(tokens.default_ttl(), Duration::hours(1));
}

#[test]
fn test_extract_role_claim() {
    let tokens = TokenService::new(&get_test_jwt_config());
    let mut extra = ExtraClaims::new();
    extra.insert("role".into(), json!("ADMIN"));

    let token = tokens
        .issue("alice@example.com", extra, Duration::minutes(5))
        .unwrap();

    let (subject, role) = tokens
        .extract_claim(&token, |c| {
            (
                c.sub.clone(),
                c.extra_claim("role").and_then(|v| v.as_str()).map(str::to_owned),
            )
        })
        .unwrap();
    assert_eq!(subject, "alice@example.com");
    assert_eq!(role.as_deref(), Some("ADMIN"));
}

#[test]
fn test_token_from_other_key_rejected() {
    let tokens = TokenService::new(&get_test_jwt_config());
    let other = TokenService::with_key(
        &SigningKey::from_bytes(b"another-secret-key-that-is-32-bytes!".to_vec()).unwrap(),
        Duration::hours(1),
    );

    let token = other
        .issue("alice@example.com", ExtraClaims::new(), Duration::hours(1))
        .unwrap();

    assert_eq!(
        tokens.validate(&token, "alice@example.com"),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_subject_mismatch() {
    let tokens = TokenService::new(&get_test_jwt_config());
    let token = tokens
        .issue("alice@example.com", ExtraClaims::new(), Duration::hours(1))
        .unwrap();

    assert_eq!(
        tokens.validate(&token, "eve@example.com"),
        Err(TokenError::SubjectMismatch)
    );
}

#[test]
fn test_validate_garbage() {
    let tokens = TokenService::new(&get_test_jwt_config());
    assert!(matches!(
        tokens.validate("invalid.token.here", "alice@example.com"),
        Err(TokenError::Malformed(_))
    ));
}
