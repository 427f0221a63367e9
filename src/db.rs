use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use tracing::info;

use crate::config::{self, DatabaseConfig};
use crate::store::DEFAULT_CATEGORIES;

/// Creates the database file if needed and opens a pool on it.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let db_url = &cfg.url;
    config::ensure_sqlite_parent_dir(db_url)?;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        info!("Creating SQLite database at {}", db_url);
        Sqlite::create_database(db_url).await?;
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                let _ = sqlx::query("PRAGMA busy_timeout=10000;").execute(&mut *conn).await;
                Ok(())
            })
        })
        .connect(db_url)
        .await?;
    Ok(pool)
}

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    // No foreign key on category: questions may reference categories that were never seeded.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    if let Err(e) =
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)").execute(pool).await
    {
        tracing::warn!("Failed to create index idx_questions_category: {}", e);
    }

    Ok(())
}

/// Inserts the default categories, leaving existing ids untouched.
pub async fn seed_categories(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut inserted = 0u64;
    for (id, kind) in DEFAULT_CATEGORIES {
        let res = sqlx::query("INSERT OR IGNORE INTO categories (id, type) VALUES (?1, ?2)")
            .bind(id)
            .bind(kind)
            .execute(pool)
            .await?;
        inserted += res.rows_affected();
    }
    if inserted > 0 {
        info!("Seeded {} categories", inserted);
    }
    Ok(())
}
