//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! Every API call normalizes its failure into one [`ApiError`] variant carrying
//! a user-displayable message. The message prefers the server's structured
//! `message` field and falls back to a generic transport description. Errors
//! are never silently swallowed: the API layer raises them, screens decide
//! whether to show them inline or force a redirect to Login.

use thiserror::Error;

/// Normalized API failure, categorized by what the screen layer should do
/// with it.
///
/// - `Auth` forces the session back to Anonymous and a redirect to Login on
///   session-dependent screens
/// - `Validation` is shown inline next to the offending form
/// - `Network`/`Timeout`/`Server`/`NotFound` are shown inline or degrade to an
///   empty list, per screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response reached the client (DNS, connection refused, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout. Distinct from `Network`
    /// so screens can word the message differently.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// 401: missing, invalid, or expired token. The caller must treat this as
    /// a forced transition to Anonymous.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// 4xx with a structured message, or a client-side precondition failure
    /// caught before any network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// 404: the requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// 5xx or an unparseable response body.
    #[error("server error: {0}")]
    Server(String),
}

impl ApiError {
    /// True when this error must force the session back to Anonymous.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Server(format!("unparseable response: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Convenience alias used throughout the client.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
