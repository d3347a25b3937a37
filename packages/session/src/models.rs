//! # Domain models for the authenticated session
//!
//! Defines the data structures shared between the session manager, the
//! credential store, and the `api` crate. These types are `Serialize +
//! Deserialize` so they can be persisted to browser storage and decoded from
//! backend responses.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Role`] | Which side of the marketplace the account is acting as — `Client` or `Professional`. Held as a single enum in memory; the backend's `is_professional` boolean exists only at the serialization boundary. |
//! | [`User`] | The authenticated account in canonical shape: string identifier (route parameters compare as strings), display name, email, and role. |
//! | [`Session`] | A user together with the token that proves it. The two are never persisted or held apart. |
//! | [`LoginUser`] / [`LoginResponse`] | The raw, permissive decoding of the authentication endpoint's body, before the session manager validates and normalizes it. |
//!
//! ## Serialization boundary
//!
//! `User` serializes as `{id, full_name, email, is_professional}` — the same
//! record the backend speaks and the credential store persists. The
//! `role`/`is_professional` pair therefore cannot drift: the boolean is
//! computed from the enum on the way out and folded back into it on the way
//! in.

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when the backend sends an empty or missing name.
pub const DEFAULT_DISPLAY_NAME: &str = "Usuário Vagali";

/// Which side of the marketplace the account is currently acting as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Client,
    Professional,
}

impl Role {
    /// The backend's boolean rendering of the role.
    pub fn is_professional(self) -> bool {
        matches!(self, Role::Professional)
    }

    pub fn from_flag(is_professional: bool) -> Self {
        if is_professional {
            Role::Professional
        } else {
            Role::Client
        }
    }
}

/// The authenticated account as the rest of the app sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserRecord", into = "UserRecord")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_professional(&self) -> bool {
        self.role.is_professional()
    }

    /// Normalize a raw login payload into the canonical shape: identifier as
    /// a string, role folded from the professional flag, and a placeholder
    /// display name when the backend sends none.
    ///
    /// Returns `None` when the payload has no identifier.
    pub fn from_login(raw: LoginUser) -> Option<User> {
        let id = raw.id?;
        let full_name = match raw.full_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_DISPLAY_NAME.to_string(),
        };
        Some(User {
            id,
            full_name,
            email: raw.email.unwrap_or_default(),
            role: Role::from_flag(raw.is_professional),
        })
    }
}

/// The wire and storage rendering of a [`User`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct UserRecord {
    id: String,
    full_name: String,
    email: String,
    is_professional: bool,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            role: Role::from_flag(record.is_professional),
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            is_professional: user.role.is_professional(),
            id: user.id,
            full_name: user.full_name,
            email: user.email,
        }
    }
}

/// An authenticated session: the user and the credential that proves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Raw user payload from the authentication endpoint. Every field is
/// optional here; validation happens in the session manager.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginUser {
    /// The backend sends a numeric id; older deployments sent a string.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_professional: bool,
}

/// Decoded body of the authentication endpoint, before validation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Djoser deployments return the token as `auth_token`.
    #[serde(default, alias = "auth_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// Accepts numeric or string identifiers, coercing both to `String`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_maps_to_professional_flag() {
        assert!(Role::Professional.is_professional());
        assert!(!Role::Client.is_professional());
        assert_eq!(Role::from_flag(true), Role::Professional);
        assert_eq!(Role::from_flag(false), Role::Client);
    }

    #[test]
    fn user_serializes_with_boundary_flag() {
        let user = User {
            id: "7".to_string(),
            full_name: "Maria Profissional".to_string(),
            email: "maria@mail.com".to_string(),
            role: Role::Professional,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["is_professional"], true);
        assert!(json.get("role").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn login_response_accepts_both_token_field_names() {
        let plain: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "user": {"id": 2}}"#).unwrap();
        assert_eq!(plain.token.as_deref(), Some("abc"));

        let djoser: LoginResponse =
            serde_json::from_str(r#"{"auth_token": "abc", "user": {"id": 2}}"#).unwrap();
        assert_eq!(djoser.token.as_deref(), Some("abc"));
    }

    #[test]
    fn numeric_and_string_ids_both_decode() {
        let numeric: LoginUser = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(numeric.id.as_deref(), Some("2"));

        let string: LoginUser = serde_json::from_str(r#"{"id": "2"}"#).unwrap();
        assert_eq!(string.id.as_deref(), Some("2"));

        let absent: LoginUser = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.id, None);
    }

    #[test]
    fn missing_display_name_gets_placeholder() {
        let user = User::from_login(LoginUser {
            id: Some("3".to_string()),
            full_name: None,
            email: Some("a@b.com".to_string()),
            is_professional: true,
        })
        .unwrap();
        assert_eq!(user.full_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(user.role, Role::Professional);

        let blank = User::from_login(LoginUser {
            id: Some("3".to_string()),
            full_name: Some("   ".to_string()),
            email: None,
            is_professional: false,
        })
        .unwrap();
        assert_eq!(blank.full_name, DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn login_user_without_id_does_not_normalize() {
        assert!(User::from_login(LoginUser::default()).is_none());
    }
}
