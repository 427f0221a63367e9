use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::{AppConfig, StorageBackend};
use crate::routes;
use crate::state::AppState;
use crate::store::{MemoryStore, QuestionStore};
use crate::types::NewQuestion;

pub fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StorageBackend::Memory;
    config
}

pub fn memory_app(store: Arc<MemoryStore>) -> Router {
    routes::router(AppState::new(store, memory_config()))
}

/// Router over a fresh SQLite file; keep the `TempDir` alive for the test's duration.
pub async fn sqlite_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.database.backend = StorageBackend::Sqlite;
    config.database.url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    config.database.max_connections = 1;
    let state = AppState::open(config).await.unwrap();
    (routes::router(state), dir)
}

pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion { question: question.to_string(), answer: answer.to_string(), category, difficulty }
}

/// Inserts `count` questions into `category`, returning their ids.
pub async fn add_questions(store: &MemoryStore, category: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let q = new_question(&format!("Category {} question {}?", category, i), "answer", category, 1);
        ids.push(store.insert(q).await.unwrap());
    }
    ids
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let (status, _, bytes) = send_raw(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

pub fn assert_error_envelope(body: &Value, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
    assert_eq!(body.as_object().map(|o| o.len()), Some(3), "unexpected keys in {}", body);
}
