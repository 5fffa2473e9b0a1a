//! Error types shared between the API server and its clients

use thiserror::Error;

/// Authentication error types
///
/// Every variant maps to HTTP 401; they differ only in the message
/// returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("The provided token has expired")]
    TokenExpired,

    #[error("The provided token is invalid")]
    InvalidToken,

    #[error("Access denied. No token provided.")]
    MissingToken,

    #[error("Invalid token. User not found.")]
    UnknownUser,
}

impl AuthError {
    /// Short machine-readable reason, used as a metrics label
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidToken => "invalid_token",
            AuthError::MissingToken => "missing_token",
            AuthError::UnknownUser => "unknown_user",
        }
    }
}
