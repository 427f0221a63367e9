//! In-crate tests for the Trivia backend.
//!
//! - **support**: shared helpers for building routers and sending requests
//! - **api_tests**: category and question endpoints
//! - **quiz_api_tests**: the quiz endpoint
//! - **error_tests**: error kinds and the JSON envelope
//! - **config_tests**: configuration loading and validation
//! - **db_tests**: schema initialization and the SQLite store
//! - **health_api_tests**: index, health, readiness, version and metrics
//!
//! Run with `cargo test`, or a single module with e.g. `cargo test quiz_api_tests`.

pub mod support;

pub mod db_tests;
