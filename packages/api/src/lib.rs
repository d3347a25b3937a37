//! # API crate — REST boundary to the Vagali backend
//!
//! This crate is the only place the app talks HTTP. It wraps the external
//! Django REST backend behind [`ApiClient`], binds the current session token
//! to every outgoing request through [`RequestAuthorizer`], and implements
//! the `session` crate's transport contract so the session manager can drive
//! authentication without knowing about HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`authorizer`] | The token-to-request binding: one current token, read at authorization time, never attached to authentication endpoints |
//! | [`client`] | [`ApiClient`] — login, registration, and profile calls against the backend |
//! | [`config`] | Backend endpoint configuration (`vagali.toml`) |
//! | [`endpoints`] | Canonical backend paths and the authentication-endpoint classification |
//! | [`types`] | Wire DTOs for registration and the profile resource |
//!
//! ## Consumer contract
//!
//! Any authorized call can come back [`ApiError::Unauthorized`] once the
//! backend stops accepting the token. The core never reacts to that on its
//! own: the consumer that observed it calls `SessionManager::logout` so
//! client state matches backend-side validity.

pub mod authorizer;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod types;

mod error;
pub use error::ApiError;

pub use authorizer::RequestAuthorizer;
pub use client::ApiClient;
pub use config::{BackendConfig, VagaliConfig};
pub use types::{ProfileDetails, ProfileResponse, ProfileUpdate, RegisterRequest};

pub use session::{LoginResponse, Role, Session, User};
