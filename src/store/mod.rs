//! Storage collaborator for questions and categories.
//!
//! Handlers only see the [`QuestionStore`] trait so the backend can be swapped
//! by configuration: [`SqliteStore`] for real deployments, [`MemoryStore`] for
//! throwaway instances and tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Category, NewQuestion, Question};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Categories seeded into a fresh store.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every listing is ordered by id ascending.
#[async_trait]
pub trait QuestionStore: Send + Sync + 'static {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;
    async fn list_all(&self) -> StoreResult<Vec<Question>>;
    async fn list_by_category(&self, category: i64) -> StoreResult<Vec<Question>>;
    /// Case-sensitive substring match on the question text. The empty term matches everything.
    async fn list_by_substring(&self, term: &str) -> StoreResult<Vec<Question>>;
    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Question>>;
    /// Persists the question and returns its generated id.
    async fn insert(&self, question: NewQuestion) -> StoreResult<i64>;
    /// Returns `false` when no row had that id.
    async fn delete_by_id(&self, id: i64) -> StoreResult<bool>;
    async fn ping(&self) -> StoreResult<()>;
}
