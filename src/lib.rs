//! # Trivia Backend Library
//!
//! Core library for the Trivia API: categories, paginated question listing and
//! search, question creation and deletion, and a random quiz question picker.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: SQLite persistence behind the [`store::QuestionStore`] trait
//! - **Tokio**: Async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`config`]: Layered configuration (embedded defaults, files, environment)
//! - [`db`]: SQLite connection, schema initialization and category seeding
//! - [`error`]: The three client-visible error kinds and their JSON envelope
//! - [`metrics`]: Request counters
//! - [`pagination`]: Offset pagination shared by the listing endpoints
//! - [`quiz`]: Random question selection excluding already-asked questions
//! - [`routes`]: HTTP handlers and router assembly
//! - [`state`]: Shared application state
//! - [`store`]: Storage trait with SQLite and in-memory backends
//! - [`types`]: Records, request and response bodies

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod pagination;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
