//! # Credential store — durable persistence of the session
//!
//! [`CredentialStore`] keeps the session alive across page reloads by writing
//! the token and the serialized user record into an abstract
//! [`KeyValueStorage`] under two fixed keys. Implementations live in sibling
//! modules ([`crate::memory`], and `local` on the web platform), so the same
//! logic works against browser `localStorage` and an in-memory fake in tests.
//!
//! ## Invariants
//!
//! Both entries are written together on login and removed together on logout.
//! [`load`](CredentialStore::load) treats any inconsistency — one entry
//! missing, or an unparseable user record — as "no session" and clears both
//! entries, so a corrupt record can never produce a half-authenticated UI.
//! Corruption is traced, never surfaced: a corrupt session is equivalent to
//! no session.

use crate::models::User;

/// Async key-value storage the credential store persists into.
///
/// Mirrors the `get`/`set`/`remove` surface of browser `localStorage`.
/// Implementations swallow storage errors; an unavailable storage area
/// behaves like an empty one.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Canonical storage key for the raw token string.
pub(crate) const TOKEN_KEY: &str = "vagali_token";
/// Canonical storage key for the serialized user record.
pub(crate) const USER_KEY: &str = "vagali_user";

/// Durable token + user persistence over a [`KeyValueStorage`].
#[derive(Clone, Debug)]
pub struct CredentialStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist both entries. Callers never observe only one written: the
    /// user record is serialized up front, and nothing is touched if that
    /// fails.
    pub async fn save(&self, token: &str, user: &User) {
        let Ok(record) = serde_json::to_string(user) else {
            tracing::error!(user = %user.id, "could not serialize user record, session not persisted");
            return;
        };
        self.storage.set(TOKEN_KEY, token).await;
        self.storage.set(USER_KEY, &record).await;
    }

    /// Read the persisted session, or `None` when there isn't one.
    ///
    /// A partial or unreadable record is evicted before returning `None`, so
    /// the next `load` starts from a clean store.
    pub async fn load(&self) -> Option<(String, User)> {
        let token = self.storage.get(TOKEN_KEY).await;
        let record = self.storage.get(USER_KEY).await;

        match (token, record) {
            (Some(token), Some(record)) => match serde_json::from_str::<User>(&record) {
                Ok(user) => Some((token, user)),
                Err(err) => {
                    tracing::warn!("stored user record is unreadable, discarding session: {err}");
                    self.clear().await;
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("partial credential record found, discarding session");
                self.clear().await;
                None
            }
        }
    }

    /// Remove both entries. Idempotent.
    pub async fn clear(&self) {
        self.storage.remove(TOKEN_KEY).await;
        self.storage.remove(USER_KEY).await;
    }
}
