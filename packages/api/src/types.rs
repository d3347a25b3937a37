//! Wire DTOs for registration and the profile resource.
//!
//! These mirror the backend's serializers. Response fields default when
//! absent so older deployments that omit a field still decode; update
//! payloads skip `None` fields so a partial `PATCH` only touches what the
//! caller set.

use serde::{Deserialize, Serialize};

/// `POST /accounts/register/` body. Professional-only fields are optional
/// and simply omitted for client accounts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Password confirmation, checked server-side as well.
    pub password2: String,
    pub full_name: String,
    pub is_professional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
}

/// `GET`/`PATCH /accounts/perfil/me/` response: the user row with its nested
/// profile and aggregate read-only fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "session::models::deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_professional: bool,
    #[serde(default)]
    pub profile: ProfileDetails,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub feedback_count: u32,
    #[serde(default)]
    pub demands_completed: u32,
}

/// The nested `profile` object of [`ProfileResponse`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileDetails {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub servico_principal: String,
    #[serde(default)]
    pub descricao_servicos: String,
}

/// `PATCH /accounts/perfil/me/` body. A role confirmation is just
/// `ProfileUpdate::role_only(...)`; the backend handles an
/// `is_professional`-only payload without touching the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_professional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfilePatch>,
}

impl ProfileUpdate {
    /// A payload that only switches the account role.
    pub fn role_only(is_professional: bool) -> Self {
        Self {
            is_professional: Some(is_professional),
            profile: None,
        }
    }
}

/// Partial update of the nested profile object.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servico_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_servicos: Option<String>,
}
