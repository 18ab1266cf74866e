//! Authentication error types

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer token was provided in the request
    #[error("no authentication token provided")]
    MissingToken,

    /// The token is malformed, has a bad signature, or carries
    /// unexpected claims
    #[error("invalid token")]
    InvalidToken,

    /// The token has expired
    #[error("token has expired")]
    Expired,

    /// Unknown nickname or wrong password. Deliberately a single
    /// variant so login failures reveal nothing about which half
    /// was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The requested nickname is already registered
    #[error("nickname already exists")]
    NicknameTaken,

    /// A required signup field was empty or absent
    #[error("{0}")]
    MissingField(&'static str),

    /// Password hashing or verification failed internally
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// The credential store failed
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    }
}
