//! API error types.

use thiserror::Error;

/// Errors surfaced by the HTTP client adapter.
///
/// The connectivity/expiry/authorization/server variants carry the uniform
/// classification applied to every authenticated call; `Api` is the
/// pass-through for statuses the adapter does not interpret.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (transport failure).
    #[error("could not reach the server: {0}")]
    Connectivity(String),

    /// HTTP 401 — the session is no longer valid; credentials were cleared
    /// and a redirect to the entry route was scheduled.
    #[error("session expired — sign in again")]
    SessionExpired,

    /// HTTP 403 — the session is valid but the action is not allowed.
    #[error("access denied: {0}")]
    Forbidden(String),

    /// HTTP 5xx — server-side failure.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status, passed through to the caller.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}
