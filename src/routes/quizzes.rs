use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    quiz,
    state::AppState,
    types::{QuizRequest, QuizResponse},
};

/// Serves a random question of the requested category that is not in
/// `previous_questions`. No `question` in the response means the quiz is over.
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> AppResult<Json<QuizResponse>> {
    let Json(req) = payload?;
    let previous = req
        .previous_questions
        .ok_or_else(|| AppError::UnprocessableEntity("previous_questions must be a list".into()))?;
    let category = req
        .quiz_category
        .ok_or_else(|| AppError::UnprocessableEntity("quiz_category is required".into()))?;

    // Exclusion happens on the fetched candidates, not in SQL
    let candidates = state.store.list_by_category(category.id).await?;
    let total = candidates.len();
    let question = quiz::pick(candidates, &previous);

    match &question {
        Some(q) => {
            state.metrics.inc_quiz_questions_served();
            debug!(category_id = category.id, question_id = q.id, candidates = total, "Picked quiz question");
        }
        None => {
            state.metrics.inc_quizzes_completed();
            debug!(category_id = category.id, asked = previous.len(), "No quiz questions left");
        }
    }

    Ok(Json(QuizResponse { success: true, question }))
}
