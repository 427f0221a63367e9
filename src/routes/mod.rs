//! HTTP route handlers for the Trivia API.
//!
//! - `categories`: category listing and per-category question listing
//! - `health`: index, health, readiness, version and metrics endpoints
//! - `questions`: question listing/search, creation and deletion
//! - `quizzes`: random quiz question selection

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{error, state::AppState};

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
const ALLOWED_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

/// Builds the full application router, trivia routes mounted under `api.base_path`.
pub fn router(state: AppState) -> Router {
    let base = state.config.base_path().to_string();
    let index_path = if base.is_empty() { "/".to_string() } else { base.clone() };

    Router::new()
        .route(&index_path, get(health::index))
        .route(&format!("{}/categories", base), get(categories::list_categories))
        .route(&format!("{}/categories/{{id}}/questions", base), get(categories::list_category_questions))
        .route(
            &format!("{}/questions", base),
            get(questions::list_questions).post(questions::create_question),
        )
        .route(&format!("{}/questions/{{id}}", base), delete(questions::delete_question))
        .route(&format!("{}/quizzes", base), post(quizzes::play_quiz))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // CorsLayer only answers these on preflight; clients expect them on every response
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::PATCH, Method::POST, Method::DELETE, Method::OPTIONS])
}
