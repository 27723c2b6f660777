use signet_core::{BcryptHasher, PasswordHasher};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = BcryptHasher::new(4).hash(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_is_salted() {
    let hasher = BcryptHasher::new(4);
    let first = hasher.hash("samepassword").unwrap();
    let second = hasher.hash("samepassword").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("samepassword", &first).unwrap());
    assert!(hasher.verify("samepassword", &second).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hasher = BcryptHasher::new(4);
    let hash = hasher.hash("correctpassword").unwrap();

    assert!(!hasher.verify("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_case_sensitive() {
    let hasher = BcryptHasher::new(4);
    let hash = hasher.hash("Password").unwrap();

    assert!(!hasher.verify("password", &hash).unwrap());
}

#[test]
fn test_verify_against_corrupt_hash_errors() {
    let hasher = BcryptHasher::new(4);
    assert!(hasher.verify("anything", "not-a-bcrypt-hash").is_err());
}

#[test]
fn test_passwords_sharing_a_long_prefix_do_not_collide() {
    let hasher = BcryptHasher::new(4);
    let stored = format!("{}a", "é".repeat(35));
    let hash = hasher.hash(&stored).unwrap();

    let longer = format!("{stored}zzzz");
    assert!(!hasher.verify(&longer, &hash).unwrap());
    assert!(hasher.hash(&longer).is_err());
}
