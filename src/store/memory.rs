use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use signet_models::{Email, NewUser, UserRecord};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CredentialStore, StoreError};

/// Process-local store keyed by normalized email.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, StoreError> {
        Ok(self.users.read().await.contains_key(email.as_str()))
    }

    async fn save(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        match users.entry(user.email.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: Uuid::new_v4(),
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    password_hash: user.password_hash,
                };
                Ok(slot.insert(record).clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: Email::new(email).unwrap(),
            password_hash: "hash".into(),
        }
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let store = InMemoryCredentialStore::new();
        let saved = store.save(new_user("ada@example.com")).await.unwrap();

        let email = Email::new("ada@example.com").unwrap();
        let found = store.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert!(store.exists_by_email(&email).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryCredentialStore::new();
        store.save(new_user("ada@example.com")).await.unwrap();

        let err = store.save(new_user("ADA@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_email() {
        let store = InMemoryCredentialStore::new();
        let email = Email::new("nobody@example.com").unwrap();
        assert!(store.find_by_email(&email).await.unwrap().is_none());
        assert!(!store.exists_by_email(&email).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_saves_single_winner() {
        let store = Arc::new(InMemoryCredentialStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.save(new_user("race@example.com")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
