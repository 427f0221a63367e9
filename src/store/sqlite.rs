use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{QuestionStore, StoreResult};
use crate::types::{Category, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QuestionStore for SqliteStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_all(&self) -> StoreResult<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query_as::<_, Question>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn list_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE category = ?1 ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query_as::<_, Question>(&sql).bind(category).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn list_by_substring(&self, term: &str) -> StoreResult<Vec<Question>> {
        // instr() is case-sensitive, LIKE is not (for ASCII)
        let sql = format!("SELECT {} FROM questions WHERE instr(question, ?1) > 0 ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query_as::<_, Question>(&sql).bind(term).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS);
        let row = sqlx::query_as::<_, Question>(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn insert(&self, question: NewQuestion) -> StoreResult<i64> {
        let res = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?1, ?2, ?3, ?4)"#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let res = sqlx::query("DELETE FROM questions WHERE id = ?1").bind(id).execute(&self.pool).await?;
        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
