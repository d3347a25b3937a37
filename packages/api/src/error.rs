//! Errors from backend calls.

use thiserror::Error;

/// Failure of a request against the Vagali backend.
///
/// `Unauthorized` is the variant consumers must react to: the backend no
/// longer accepts the bound token, and the only consistent recovery is
/// calling `SessionManager::logout` so client state matches. The core never
/// logs the user out on its own.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not authorized")]
    Unauthorized,
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("malformed backend response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend rejected the bound token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized
        } else {
            ApiError::Status(status.as_u16())
        }
    }
}
