use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult, OptionExt},
    pagination::{page_number, paginate, QUESTIONS_PER_PAGE},
    state::AppState,
    types::{category_map, CreateQuestionRequest, QuestionsQuery, QuestionsResponse, SuccessResponse},
};

pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<QuestionsQuery>, QueryRejection>,
) -> AppResult<Json<QuestionsResponse>> {
    let Query(q) = query?;
    let page = page_number(q.page.as_deref());
    let term = q.search_term.unwrap_or_default();

    let questions = if term.is_empty() {
        state.store.list_all().await?
    } else {
        state.metrics.inc_searches();
        state.store.list_by_substring(&term).await?
    };
    let window = paginate(&questions, page, QUESTIONS_PER_PAGE)?;
    let categories = state.store.list_categories().await?;
    debug!(page, search_term = %term, matched = questions.len(), returned = window.len(), "Listed questions");

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: window.to_vec(),
        categories: category_map(&categories),
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Json(req) = payload?;
    let new_question = req.into_new_question().ok_or_else(|| {
        AppError::UnprocessableEntity("question, answer, category and difficulty are required".into())
    })?;

    let category = new_question.category;
    let id = state.store.insert(new_question).await?;
    state.metrics.inc_questions_created();
    info!(id, category, "Created question");

    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Path(question_id) = path?;

    state.store.get_by_id(question_id).await?.ok_or_not_found("question")?;
    // Someone else may have deleted it in between
    if !state.store.delete_by_id(question_id).await? {
        return Err(AppError::NotFound(format!("question {} vanished before delete", question_id)));
    }
    state.metrics.inc_questions_deleted();
    info!(question_id, "Deleted question");

    Ok(Json(SuccessResponse::ok()))
}
