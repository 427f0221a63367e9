use crate::{state::AppState, types::IndexResponse};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse { success: true, message: "Welcome to Trivia-API" })
}

// Health check endpoint - lightweight
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks store connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::time::timeout(std::time::Duration::from_secs(5), state.store.ping()).await {
        Ok(Ok(())) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.get_snapshot())
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP trivia_questions_created Questions created\n# TYPE trivia_questions_created counter\ntrivia_questions_created {}\n\
# HELP trivia_questions_deleted Questions deleted\n# TYPE trivia_questions_deleted counter\ntrivia_questions_deleted {}\n\
# HELP trivia_searches Question searches with a non-empty term\n# TYPE trivia_searches counter\ntrivia_searches {}\n\
# HELP trivia_quiz_questions_served Quiz questions served\n# TYPE trivia_quiz_questions_served counter\ntrivia_quiz_questions_served {}\n\
# HELP trivia_quizzes_completed Quiz requests with no question left\n# TYPE trivia_quizzes_completed counter\ntrivia_quizzes_completed {}\n\
# HELP trivia_uptime_seconds Uptime seconds\n# TYPE trivia_uptime_seconds gauge\ntrivia_uptime_seconds {}\n",
        m.questions_created,
        m.questions_deleted,
        m.searches,
        m.quiz_questions_served,
        m.quizzes_completed,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "api": {
            "base_path": state.config.base_path(),
            "storage": format!("{:?}", state.config.database.backend).to_lowercase(),
        },
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
