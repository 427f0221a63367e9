use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::debug;

use crate::{
    error::AppResult,
    pagination::{page_number, paginate, CATEGORIES_PER_PAGE, QUESTIONS_PER_PAGE},
    state::AppState,
    types::{category_map, CategoriesResponse, CategoryQuestionsResponse, PageQuery},
};

pub async fn list_categories(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Json<CategoriesResponse>> {
    let Query(q) = query?;
    let page = page_number(q.page.as_deref());

    let categories = state.store.list_categories().await?;
    let window = paginate(&categories, page, CATEGORIES_PER_PAGE)?;
    debug!(page, returned = window.len(), total = categories.len(), "Listed categories");

    Ok(Json(CategoriesResponse { success: true, categories: category_map(window) }))
}

/// Questions of one category. `total_questions` is the length of the returned
/// page, unlike `/questions` which reports the whole filtered set.
pub async fn list_category_questions(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Json<CategoryQuestionsResponse>> {
    let Path(category_id) = path?;
    let Query(q) = query?;
    let page = page_number(q.page.as_deref());

    let questions = state.store.list_by_category(category_id).await?;
    let window = paginate(&questions, page, QUESTIONS_PER_PAGE)?;
    debug!(category_id, page, returned = window.len(), "Listed questions in category");

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: window.len(),
        questions: window.to_vec(),
        current_category: category_id,
    }))
}
