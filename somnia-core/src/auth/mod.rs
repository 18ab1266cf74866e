//! Authentication: password credentials and bearer tokens
//!
//! [`Authenticator`] implements the signup/login contract over a
//! [`CredentialStore`]; [`TokenService`] issues and verifies the signed,
//! two-hour identity tokens every other operation requires.

mod error;
pub mod password;
mod token;

pub use error::AuthError;
pub use token::{TokenClaims, TokenService};

use std::sync::Arc;

use crate::store::CredentialStore;
use crate::types::User;

/// Signup and login over a credential store
pub struct Authenticator {
    users: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn CredentialStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new user. Fails with [`AuthError::NicknameTaken`] when the
    /// nickname is already registered and [`AuthError::MissingField`] when
    /// either field is empty.
    pub async fn signup(&self, nickname: &str, password: &str) -> Result<User, AuthError> {
        if nickname.trim().is_empty() {
            return Err(AuthError::MissingField("nickname is required"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password is required"));
        }

        let password_hash = password::hash_blocking(password.to_string()).await?;
        let user = User::new(nickname.trim(), password_hash);
        self.users.create_user(&user).map_err(|e| {
            if e.is_conflict() {
                AuthError::NicknameTaken
            } else {
                AuthError::Store(e)
            }
        })?;

        tracing::info!(nickname = %user.nickname, "user registered");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token. Unknown nicknames and
    /// wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, nickname: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .find_by_nickname(nickname)?
            .ok_or(AuthError::InvalidCredentials)?;

        let ok =
            password::verify_blocking(password.to_string(), user.password_hash.clone()).await?;
        if !ok {
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(&user.id, &user.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn authenticator() -> (Authenticator, Arc<TokenService>) {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let tokens = Arc::new(TokenService::new(b"test-secret"));
        (Authenticator::new(store, tokens.clone()), tokens)
    }

    #[tokio::test]
    async fn signup_then_login_issues_verifiable_token() {
        let (auth, tokens) = authenticator();
        auth.signup("ada", "hunter2").await.unwrap();

        let token = auth.login("ada", "hunter2").await.unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.nickname, "ada");
    }

    #[tokio::test]
    async fn signup_rejects_empty_fields() {
        let (auth, _) = authenticator();
        assert!(matches!(
            auth.signup("", "hunter2").await,
            Err(AuthError::MissingField(_))
        ));
        assert!(matches!(
            auth.signup("ada", "").await,
            Err(AuthError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_nickname_is_rejected() {
        let (auth, _) = authenticator();
        auth.signup("ada", "hunter2").await.unwrap();
        assert!(matches!(
            auth.signup("ada", "other").await,
            Err(AuthError::NicknameTaken)
        ));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_identical() {
        let (auth, _) = authenticator();
        auth.signup("ada", "hunter2").await.unwrap();

        let wrong_password = auth.login("ada", "nope").await.unwrap_err();
        let unknown_user = auth.login("ghost", "nope").await.unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
