//! Assessment lifecycle handlers: start, answer, complete, history

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use somnia_core::Assessment;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Response for starting an assessment
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub assessment_id: String,
}

/// POST /api/assessment/start
pub async fn start(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<StartResponse>, ApiError> {
    let assessment = state.assessments.start(&user.id)?;
    Ok(Json(StartResponse {
        assessment_id: assessment.id,
    }))
}

/// Request body for submitting one answer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub answer: String,
}

/// POST /api/assessment/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(body): Json<AnswerRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .assessments
        .record_answer(&body.assessment_id, &body.question_id, &body.answer)?;
    Ok(Json(json!({ "message": "Answer recorded" })))
}

/// Request body for completing an assessment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    #[serde(default)]
    pub assessment_id: String,
}

/// Response for completing an assessment
#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteResponse {
    pub message: String,
    pub assessment: Assessment,
}

/// POST /api/assessment/complete
pub async fn complete(
    State(state): State<AppState>,
    Json(body): Json<CompleteRequest>,
) -> Result<Json<CompleteResponse>, ApiError> {
    let assessment = state.assessments.complete(&body.assessment_id)?;
    Ok(Json(CompleteResponse {
        message: "Assessment completed".to_string(),
        assessment,
    }))
}

/// GET /api/assessment/history - the user's runs, most recent first
pub async fn history(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    Ok(Json(state.assessments.history(&user.id)?))
}
