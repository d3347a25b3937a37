//! # HTTP client for the Vagali backend
//!
//! [`ApiClient`] joins the configured base URL with the canonical endpoint
//! paths and routes every request through the [`RequestAuthorizer`], so call
//! sites never manage the token themselves. It implements
//! [`session::AuthTransport`], which is how the session manager performs the
//! login call and (re)binds the token on login, logout, and restore.

use reqwest::Method;
use serde::Serialize;
use session::{AuthTransport, LoginResponse};

use crate::authorizer::RequestAuthorizer;
use crate::config::BackendConfig;
use crate::endpoints;
use crate::error::ApiError;
use crate::types::{ProfileResponse, ProfileUpdate, RegisterRequest};

/// Client for the marketplace REST API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// authorizer binding.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    authorizer: RequestAuthorizer,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorizer: RequestAuthorizer::new(),
        }
    }

    /// The token binding shared by every request this client sends.
    pub fn authorizer(&self) -> &RequestAuthorizer {
        &self.authorizer
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        self.authorizer.authorize(builder, path)
    }

    fn expect_success(
        response: reqwest::Response,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, path, "backend rejected request");
            return Err(ApiError::from_status(status));
        }
        Ok(response)
    }

    /// Authenticate with email and password.
    ///
    /// Returns the permissive [`LoginResponse`]; the session manager decides
    /// whether the payload is complete enough to authenticate.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .request(Method::POST, endpoints::LOGIN)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = Self::expect_success(response, endpoints::LOGIN)?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Create an account. Like login, this call never carries a token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, endpoints::REGISTER)
            .json(request)
            .send()
            .await?;
        Self::expect_success(response, endpoints::REGISTER)?;
        Ok(())
    }

    /// Fetch the authenticated user's own profile.
    pub async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        let response = self.request(Method::GET, endpoints::PROFILE_ME).send().await?;
        let response = Self::expect_success(response, endpoints::PROFILE_ME)?;
        response
            .json::<ProfileResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Partially update the authenticated user's profile. Role switches go
    /// through here ([`ProfileUpdate::role_only`]) before the consumer
    /// reflects them locally via `SessionManager::set_role`.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ProfileResponse, ApiError> {
        let response = self
            .request(Method::PATCH, endpoints::PROFILE_ME)
            .json(update)
            .send()
            .await?;
        let response = Self::expect_success(response, endpoints::PROFILE_ME)?;
        response
            .json::<ProfileResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl AuthTransport for ApiClient {
    type Error = ApiError;

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        ApiClient::login(self, email, password).await
    }

    fn set_token(&self, token: Option<&str>) {
        self.authorizer.set_token(token);
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}
