//! Signup and login handlers

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

/// Credentials payload for signup and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .authenticator
        .signup(&body.nickname, &body.password)
        .await?;
    Ok(Json(json!({ "message": "Signup successful" })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state
        .authenticator
        .login(&body.nickname, &body.password)
        .await?;
    Ok(Json(LoginResponse { token }))
}
