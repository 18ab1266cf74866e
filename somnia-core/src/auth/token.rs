//! Signed, time-limited identity tokens

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Token lifetime (2 hours)
const TOKEN_TTL_HOURS: i64 = 2;

/// Claims embedded in an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub sub: String,
    /// User nickname, carried so handlers need no user lookup
    pub nickname: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Issues and verifies HS256-signed identity tokens
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for the given identity, valid for two hours.
    pub fn issue(&self, user_id: &str, nickname: &str) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            nickname: nickname.to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }
}
