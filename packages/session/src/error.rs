//! Error taxonomy for session operations.

use thiserror::Error;

/// Failures surfaced by [`SessionManager`](crate::SessionManager) operations.
///
/// Both variants render the same generic user-safe message: a failed login
/// never leaks backend detail that could aid credential enumeration. The two
/// are kept distinct so diagnostics can tell a rejected credential from a
/// backend that answered 2xx with a broken payload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Credentials rejected, or the transport failed before a verdict.
    #[error("Credenciais inválidas. Tente novamente.")]
    Authentication,
    /// The backend accepted the credentials but the response was missing the
    /// token or the user identifier.
    #[error("Credenciais inválidas. Tente novamente.")]
    IncompleteResponse,
}
