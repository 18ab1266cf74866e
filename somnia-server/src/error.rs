//! API error taxonomy and HTTP mapping
//!
//! Four categories cross the boundary: validation (400), auth (401),
//! conflict (409) and internal (500). Internal errors are logged with their
//! detail and returned with a fixed body so nothing leaks.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use somnia_core::{AssessmentError, AuthError};
use thiserror::Error;

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-caused: missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid or expired credentials
    #[error("{0}")]
    Auth(String),

    /// Duplicate nickname
    #[error("{0}")]
    Conflict(String),

    /// Anything unexpected; detail is logged, never returned
    #[error("server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Auth(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Validation(message) => ApiError::Validation(message),
            // Malformed time strings and storage faults both surface as a
            // generic server error.
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField(message) => ApiError::Validation(message.to_string()),
            AuthError::NicknameTaken => ApiError::Conflict(err.to_string()),
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::Expired
            | AuthError::InvalidCredentials => ApiError::Auth(err.to_string()),
            AuthError::Hash(_) | AuthError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<somnia_core::StoreError> for ApiError {
    fn from(err: somnia_core::StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::Validation("answer is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let err = ApiError::Internal("sqlite file is corrupt at page 7".into());
        assert_eq!(err.to_string(), "server error");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn nickname_conflict_maps_to_409() {
        let api: ApiError = AuthError::NicknameTaken.into();
        let response = api.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn expired_token_maps_to_401() {
        let api: ApiError = AuthError::Expired.into();
        let response = api.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
