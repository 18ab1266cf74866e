//! Thin analytics aggregations over assessments and answers

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use somnia_core::{AnswerLedger, AssessmentStore};

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// How many common answers to report
const COMMON_ANSWER_LIMIT: u32 = 5;

/// Per-user score summary
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrendsResponse {
    pub average_score: f64,
    pub total_assessments: usize,
}

/// GET /api/analytics/user-trends
///
/// Average score over all of the user's assessments. Unscored (in-progress)
/// runs count as zero, and an empty history averages to zero rather than
/// dividing by nothing.
pub async fn user_trends(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserTrendsResponse>, ApiError> {
    let assessments = state.store.assessments_for_user(&user.id)?;

    let total: i64 = assessments.iter().filter_map(|a| a.score).sum();
    let average_score = total as f64 / assessments.len().max(1) as f64;

    Ok(Json(UserTrendsResponse {
        average_score,
        total_assessments: assessments.len(),
    }))
}

/// One entry in the common-answers ranking
#[derive(Debug, Serialize, Deserialize)]
pub struct CommonAnswer {
    pub answer: String,
    pub count: u64,
}

/// GET /api/analytics/common-answers - the five most common answer texts
/// across all assessments
pub async fn common_answers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommonAnswer>>, ApiError> {
    let top = state.store.top_answers(COMMON_ANSWER_LIMIT)?;
    Ok(Json(
        top.into_iter()
            .map(|(answer, count)| CommonAnswer { answer, count })
            .collect(),
    ))
}
