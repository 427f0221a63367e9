use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuestionStore, StoreError, StoreResult, DEFAULT_CATEGORIES};
use crate::types::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, String>,
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

/// Process-local store. Ids are never reused after deletion, like AUTOINCREMENT.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_categories() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES.iter().map(|(id, kind)| (*id, kind.to_string())))
    }

    pub fn with_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (i64, String)>,
    {
        let tables = Tables { categories: categories.into_iter().collect(), ..Tables::default() };
        Self { tables: RwLock::new(tables), failing: AtomicBool::new(false) }
    }

    /// Makes every following call fail with `StoreError::Unavailable` until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store marked as failing".into()));
        }
        Ok(())
    }

    async fn filtered<F>(&self, keep: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.values().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().map(|(id, kind)| Category { id: *id, kind: kind.clone() }).collect())
    }

    async fn list_all(&self) -> StoreResult<Vec<Question>> {
        self.filtered(|_| true).await
    }

    async fn list_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        self.filtered(|q| q.category == category).await
    }

    async fn list_by_substring(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.filtered(|q| q.question.contains(term)).await
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> StoreResult<i64> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables.last_id += 1;
        let id = tables.last_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }
}
