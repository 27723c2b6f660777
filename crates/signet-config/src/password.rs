//! Password strength rules and hashing work factor.

use thiserror::Error;

use crate::{ConfigError, parse_or};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_BCRYPT_COST: u32 = 12;
/// Longest password bcrypt hashes in full. Its 72-byte input block also holds
/// a terminating NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Reason a candidate password was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("password must not be empty")]
    Empty,
    #[error("password must be at least {0} characters")]
    TooShort(usize),
    #[error("password must be at most {0} bytes")]
    TooLong(usize),
    #[error("password must contain at least one digit")]
    MissingDigit,
    #[error("password must contain at least one letter")]
    MissingLetter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
    pub require_letter: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            require_digit: false,
            require_letter: false,
        }
    }
}

impl PasswordPolicy {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let min_length: usize = parse_or(lookup, "PASSWORD_MIN_LENGTH", defaults.min_length)?;

        Ok(Self {
            // A zero minimum would let the empty password through
            min_length: min_length.max(1),
            require_digit: parse_or(lookup, "PASSWORD_REQUIRE_DIGIT", defaults.require_digit)?,
            require_letter: parse_or(lookup, "PASSWORD_REQUIRE_LETTER", defaults.require_letter)?,
        })
    }

    /// Checks `password` against the policy. The minimum counts characters,
    /// the maximum counts bytes.
    pub fn check(&self, password: &str) -> Result<(), PolicyViolation> {
        if password.is_empty() {
            return Err(PolicyViolation::Empty);
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PolicyViolation::TooLong(MAX_PASSWORD_BYTES));
        }
        if password.chars().count() < self.min_length {
            return Err(PolicyViolation::TooShort(self.min_length));
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyViolation::MissingDigit);
        }
        if self.require_letter && !password.chars().any(char::is_alphabetic) {
            return Err(PolicyViolation::MissingLetter);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordHashingConfig {
    pub cost: u32,
}

impl Default for PasswordHashingConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordHashingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cost: u32 = parse_or(lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::InvalidValue {
                var: "BCRYPT_COST",
                reason: format!("must be between 4 and 31, got {cost}"),
            });
        }
        Ok(Self { cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::from_lookup(&none).unwrap();
        assert_eq!(policy, PasswordPolicy::default());
        assert_eq!(policy.min_length, 8);
    }

    #[test]
    fn test_empty_password_always_rejected() {
        let policy = PasswordPolicy {
            min_length: 1,
            ..Default::default()
        };
        assert_eq!(policy.check(""), Err(PolicyViolation::Empty));
    }

    #[test]
    fn test_min_length_floor_is_one() {
        let lookup = |key: &str| (key == "PASSWORD_MIN_LENGTH").then(|| "0".to_string());
        let policy = PasswordPolicy::from_lookup(&lookup).unwrap();
        assert_eq!(policy.min_length, 1);
        assert!(policy.check("x").is_ok());
    }

    #[test]
    fn test_too_short() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.check("short"), Err(PolicyViolation::TooShort(8)));
        assert!(policy.check("long enough").is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let policy = PasswordPolicy {
            min_length: 4,
            ..Default::default()
        };
        // 3 characters, 6 bytes
        assert_eq!(policy.check("éèà"), Err(PolicyViolation::TooShort(4)));
    }

    #[test]
    fn test_max_length_counts_bytes() {
        let policy = PasswordPolicy::default();
        // 40 characters, 80 bytes
        assert_eq!(
            policy.check(&"é".repeat(40)),
            Err(PolicyViolation::TooLong(MAX_PASSWORD_BYTES))
        );
        assert!(policy.check(&format!("{}a", "é".repeat(35))).is_ok());
        assert!(policy.check(&"a".repeat(71)).is_ok());
        assert_eq!(
            policy.check(&"a".repeat(72)),
            Err(PolicyViolation::TooLong(71))
        );
    }

    #[test]
    fn test_character_class_requirements() {
        let policy = PasswordPolicy {
            min_length: 8,
            require_digit: true,
            require_letter: true,
        };
        assert_eq!(policy.check("abcdefgh"), Err(PolicyViolation::MissingDigit));
        assert_eq!(policy.check("12345678"), Err(PolicyViolation::MissingLetter));
        assert!(policy.check("abcd1234").is_ok());
    }

    #[test]
    fn test_invalid_bool_is_config_error() {
        let lookup = |key: &str| (key == "PASSWORD_REQUIRE_DIGIT").then(|| "yes please".to_string());
        assert!(matches!(
            PasswordPolicy::from_lookup(&lookup),
            Err(ConfigError::InvalidValue { var: "PASSWORD_REQUIRE_DIGIT", .. })
        ));
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        assert_eq!(PasswordHashingConfig::from_lookup(&none).unwrap().cost, 12);

        let low = |key: &str| (key == "BCRYPT_COST").then(|| "3".to_string());
        assert!(PasswordHashingConfig::from_lookup(&low).is_err());

        let ok = |key: &str| (key == "BCRYPT_COST").then(|| "4".to_string());
        assert_eq!(PasswordHashingConfig::from_lookup(&ok).unwrap().cost, 4);
    }
}
