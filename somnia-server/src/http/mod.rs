//! HTTP server module

mod analytics;
mod api;
mod assessment;
mod auth;
mod questions;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::middleware::require_auth;
use crate::state::AppState;

pub use analytics::{CommonAnswer, UserTrendsResponse};
pub use api::HealthResponse;
pub use assessment::{AnswerRequest, CompleteRequest, CompleteResponse, StartResponse};
pub use auth::{CredentialsRequest, LoginResponse};

/// Create the HTTP router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/questions", get(questions::list_questions))
        .route("/api/assessment/start", post(assessment::start))
        .route("/api/assessment/answer", post(assessment::answer))
        .route("/api/assessment/complete", post(assessment::complete))
        .route("/api/assessment/history", get(assessment::history))
        .route("/api/analytics/user-trends", get(analytics::user_trends))
        .route(
            "/api/analytics/common-answers",
            get(analytics::common_answers),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
