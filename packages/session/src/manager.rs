//! # Session manager — single source of truth for the authenticated user
//!
//! [`SessionManager`] owns the in-memory session and keeps three places
//! consistent on every transition: its own state, the [`CredentialStore`],
//! and the transport's token binding. Consumers read the session through
//! [`current`](SessionManager::current) or
//! [`subscribe`](SessionManager::subscribe) and request changes only through
//! the operations below — nothing else in the app mutates the store or the
//! token binding directly.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`restore`](SessionManager::restore) | Constructor. Loads the credential store; on a hit, primes the transport token and starts authenticated. |
//! | [`login`](SessionManager::login) | Calls the authentication endpoint, validates and normalizes the payload, then persists, binds the token, and updates memory. Nothing is written on any failure path. |
//! | [`logout`](SessionManager::logout) | Clears the token binding, the store, and memory. Always succeeds; subscribers observe the `None` state and take the user back to the login surface. |
//! | [`set_role`](SessionManager::set_role) / [`set_display_name`](SessionManager::set_display_name) | Local profile mutations: update, persist, notify. No-ops when logged out. |
//!
//! ## Change notifications
//!
//! State lives in a `tokio::sync::watch` channel. Every login, logout, and
//! profile mutation publishes the new snapshot, replacing the original
//! full-page-reload synchronization with an explicit signal consumers can
//! await.
//!
//! ## What the manager does not do
//!
//! No retry, no token refresh, no reaction to an expired token: when an
//! authorized call comes back unauthorized, the *consumer* calls
//! [`logout`](SessionManager::logout) to bring client state back in line
//! with the backend. Concurrent logins are not merged — the UI is expected
//! to keep at most one attempt in flight, and the last write wins otherwise.

use tokio::sync::watch;

use crate::credentials::{CredentialStore, KeyValueStorage};
use crate::error::SessionError;
use crate::models::{LoginResponse, Role, Session, User};

/// Transport the manager drives for authentication calls.
///
/// The HTTP implementation lives in the `api` crate; tests inject fakes.
/// `set_token` must take effect for every request issued after it returns,
/// and `login` must never attach the current token to its own request.
pub trait AuthTransport {
    type Error: std::fmt::Display;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, Self::Error>>;

    /// Bind (or clear) the credential attached to subsequent authorized
    /// requests.
    fn set_token(&self, token: Option<&str>);
}

/// Owner of the session lifecycle: login, restore, role switching, logout.
pub struct SessionManager<S: KeyValueStorage, T: AuthTransport> {
    store: CredentialStore<S>,
    transport: T,
    state: watch::Sender<Option<Session>>,
}

impl<S, T> SessionManager<S, T>
where
    S: KeyValueStorage,
    T: AuthTransport,
{
    /// Create a manager, restoring any session a previous run persisted.
    pub async fn restore(storage: S, transport: T) -> Self {
        let store = CredentialStore::new(storage);
        let restored = store.load().await.map(|(token, user)| {
            transport.set_token(Some(&token));
            tracing::info!(user = %user.id, "session restored from storage");
            Session { user, token }
        });
        let (state, _) = watch::channel(restored);
        Self {
            store,
            transport,
            state,
        }
    }

    /// Current session snapshot, or `None` when logged out.
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Watch for session changes (login, logout, profile mutations).
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    /// Authenticate against the backend and establish the session.
    ///
    /// On success the store, the token binding, and memory are all updated
    /// before this returns. On any failure all three keep their prior state.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let response = self.transport.login(email, password).await.map_err(|err| {
            tracing::warn!("login rejected: {err}");
            SessionError::Authentication
        })?;

        let LoginResponse {
            token: Some(token),
            user: Some(raw),
        } = response
        else {
            tracing::error!("authentication endpoint answered 2xx without a token or user");
            return Err(SessionError::IncompleteResponse);
        };
        let Some(user) = User::from_login(raw) else {
            tracing::error!("authentication endpoint returned a user without an identifier");
            return Err(SessionError::IncompleteResponse);
        };

        self.store.save(&token, &user).await;
        self.transport.set_token(Some(&token));

        let session = Session { user, token };
        self.state.send_replace(Some(session.clone()));
        tracing::info!(user = %session.user.id, "login succeeded");
        Ok(session)
    }

    /// Tear the session down everywhere. Safe to call when already logged
    /// out.
    pub async fn logout(&self) {
        self.transport.set_token(None);
        self.store.clear().await;
        self.state.send_replace(None);
        tracing::info!("logged out");
    }

    /// Locally reflect a role the caller has already had confirmed by the
    /// backend (via the profile update endpoint). No-op when logged out.
    pub async fn set_role(&self, role: Role) {
        self.update_user(|user| user.role = role).await;
    }

    /// Update the display name. No-op when logged out.
    pub async fn set_display_name(&self, name: &str) {
        let name = name.to_string();
        self.update_user(|user| user.full_name = name).await;
    }

    async fn update_user(&self, apply: impl FnOnce(&mut User)) {
        let Some(mut session) = self.current() else {
            return;
        };
        apply(&mut session.user);
        self.store.save(&session.token, &session.user).await;
        self.state.send_replace(Some(session));
    }
}
