//! Bearer-token authentication middleware for axum

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use somnia_core::AuthError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated identity attached to every protected request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub nickname: String,
}

/// Extract a bearer token from the Authorization header
fn extract_bearer(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Authentication middleware: verifies the bearer token and attaches a
/// [`CurrentUser`] to the request, or rejects with 401 before any handler
/// runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(&request).ok_or_else(|| {
        tracing::debug!("request without bearer token");
        ApiError::from(AuthError::MissingToken)
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!("token rejected: {}", e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        nickname: claims.nickname,
    });

    Ok(next.run(request).await)
}
