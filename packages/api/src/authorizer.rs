//! # Request authorizer — the token-to-request binding
//!
//! [`RequestAuthorizer`] holds the single current token and attaches it to
//! outgoing requests as `Authorization: Token <value>` (the token scheme the
//! backend's DRF token auth expects). The binding is read at authorization
//! time, not cached per request, so setting a new token supersedes the old
//! one for every request built afterwards — there is no window where a
//! replaced token can still be picked up.
//!
//! Authentication endpoints (login, registration) are excluded: see
//! [`crate::endpoints::is_auth_endpoint`].

use std::sync::{Arc, RwLock};

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

use crate::endpoints;

/// Binds the current session token to outgoing requests.
///
/// Cheap to clone; all clones share one binding. The session manager is the
/// only component that calls [`set_token`](RequestAuthorizer::set_token).
#[derive(Clone, Debug, Default)]
pub struct RequestAuthorizer {
    token: Arc<RwLock<Option<String>>>,
}

impl RequestAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or clear the active token. Effective for every request
    /// authorized after this returns.
    pub fn set_token(&self, token: Option<&str>) {
        *self.token.write().unwrap() = token.map(str::to_owned);
    }

    /// The currently bound token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Attach the authorization header, unless `path` is an authentication
    /// endpoint or no token is bound.
    pub fn authorize(&self, request: RequestBuilder, path: &str) -> RequestBuilder {
        if endpoints::is_auth_endpoint(path) {
            return request;
        }
        match self.token.read().unwrap().as_deref() {
            Some(token) => request.header(AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }
}
