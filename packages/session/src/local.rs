//! # Browser `localStorage` persistence
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] implementation used on the
//! **web platform**. It persists the credential entries into the browser's
//! `localStorage`, which survives page reloads and browser restarts.
//!
//! All browser errors degrade to "absent" for reads and no-op for writes.
//! This keeps startup resilient — a restricted or unavailable storage area
//! (private browsing, storage quota) behaves like an empty one, which the
//! credential store already treats as "no session".

use web_sys::Storage;

use crate::credentials::KeyValueStorage;

/// `localStorage`-backed storage for credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn area() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::area()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(area) = Self::area() {
            let _ = area.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(area) = Self::area() {
            let _ = area.remove_item(key);
        }
    }
}
