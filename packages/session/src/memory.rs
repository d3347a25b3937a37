use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::credentials::KeyValueStorage;

/// In-memory storage for testing and native shells.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialStore, TOKEN_KEY, USER_KEY};
    use crate::models::{Role, User};

    fn joao() -> User {
        User {
            id: "2".to_string(),
            full_name: "João Cliente".to_string(),
            email: "joao@mail.com".to_string(),
            role: Role::Client,
        }
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        let store = CredentialStore::new(storage);

        assert!(store.load().await.is_none());

        store.save("abc", &joao()).await;

        let (token, user) = store.load().await.unwrap();
        assert_eq!(token, "abc");
        assert_eq!(user, joao());
    }

    #[tokio::test]
    async fn test_corrupt_user_record_clears_store() {
        let storage = MemoryStorage::new();
        let store = CredentialStore::new(storage.clone());

        storage.set(TOKEN_KEY, "abc").await;
        storage.set(USER_KEY, "not json at all").await;

        assert!(store.load().await.is_none());

        // Both entries were evicted, so a second load is also empty.
        assert!(store.load().await.is_none());
        assert!(storage.get(TOKEN_KEY).await.is_none());
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_partial_record_is_treated_as_no_session() {
        let storage = MemoryStorage::new();
        let store = CredentialStore::new(storage.clone());

        storage.set(TOKEN_KEY, "abc").await;

        assert!(store.load().await.is_none());
        assert!(storage.get(TOKEN_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = CredentialStore::new(storage);

        store.clear().await;
        store.save("abc", &joao()).await;
        store.clear().await;
        store.clear().await;

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_session() {
        let storage = MemoryStorage::new();
        let store = CredentialStore::new(storage);

        store.save("abc", &joao()).await;

        let maria = User {
            id: "7".to_string(),
            full_name: "Maria Profissional".to_string(),
            email: "maria@mail.com".to_string(),
            role: Role::Professional,
        };
        store.save("xyz", &maria).await;

        let (token, user) = store.load().await.unwrap();
        assert_eq!(token, "xyz");
        assert_eq!(user.id, "7");
        assert!(user.is_professional());
    }
}
