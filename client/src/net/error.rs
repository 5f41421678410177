//! Failure taxonomy for credential-store and authenticated API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a page can observe is one of these variants. Pages render
//! `user_message()` inline; only `SessionExpired` changes session state, and
//! that is handled centrally by the session provider.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by authentication and authenticated API operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Wrong email or password. The user is re-prompted.
    #[error("invalid credentials: {detail}")]
    InvalidCredentials { detail: String },

    /// The held token was rejected (401/403) by an authenticated endpoint.
    #[error("session expired")]
    SessionExpired,

    /// Transport failure or unreadable response.
    #[error("network error: {0}")]
    Network(String),

    /// An authenticated operation was invoked with no session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A non-credential 4xx answer, e.g. a duplicate email or a bad reset token.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The API answered with a 5xx status.
    #[error("server error: status {status}")]
    Server { status: u16 },
}

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has ended. Please log in again.";
pub const NETWORK_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";
pub const SERVER_MESSAGE: &str = "The server could not complete the request. Try again later.";
pub const NOT_AUTHENTICATED_MESSAGE: &str = "You need to log in first.";

impl AuthError {
    /// Inline text shown to the user. Raw transport details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { detail } | Self::Rejected { detail, .. } if !detail.is_empty() => {
                detail.clone()
            }
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE.to_owned(),
            Self::Rejected { status, .. } => format!("Request was rejected ({status})."),
            Self::SessionExpired => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Network(_) => NETWORK_MESSAGE.to_owned(),
            Self::Server { .. } => SERVER_MESSAGE.to_owned(),
            Self::NotAuthenticated => NOT_AUTHENTICATED_MESSAGE.to_owned(),
        }
    }

    /// Whether retrying the same request could succeed without user changes.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }
}

/// Which kind of endpoint produced a failing status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /login`: 4xx means the credentials were wrong.
    Login,
    /// Bearer-authenticated calls: 401/403 means the token is dead.
    Authenticated,
    /// Registration and password reset: 4xx is a plain rejection.
    Public,
}

/// Map a non-success HTTP status to the error taxonomy.
#[must_use]
pub fn classify_status(endpoint: Endpoint, status: u16, detail: Option<String>) -> AuthError {
    let detail = detail.unwrap_or_default();
    match (endpoint, status) {
        (_, 500..) => AuthError::Server { status },
        (Endpoint::Authenticated, 401 | 403) => AuthError::SessionExpired,
        (Endpoint::Login, 400..=499) => AuthError::InvalidCredentials { detail },
        _ => AuthError::Rejected { status, detail },
    }
}
