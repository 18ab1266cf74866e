//! Question catalog handler

use axum::Json;
use axum::extract::State;
use somnia_core::{Question, QuestionCatalog};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/questions - the fixed assessment sequence, in ordinal order
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(state.store.list_questions()?))
}
