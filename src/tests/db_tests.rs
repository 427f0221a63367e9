#[cfg(test)]
mod tests {
    use sqlx::Row;
    use tempfile::TempDir;

    use crate::config::{AppConfig, DatabaseConfig};
    use crate::db;
    use crate::store::{QuestionStore, SqliteStore, DEFAULT_CATEGORIES};
    use crate::tests::support::new_question;

    async fn setup_test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let cfg = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("nested").join("trivia.db").display()),
            max_connections: 1,
            ..AppConfig::default().database
        };
        let pool = db::connect(&cfg).await.unwrap();
        db::init_db(&pool).await.unwrap();
        (SqliteStore::new(pool), dir)
    }

    #[tokio::test]
    async fn test_init_db() {
        let (store, _dir) = setup_test_store().await;

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
                .fetch_all(store.pool())
                .await
                .unwrap();
        assert!(tables.contains(&"categories".to_string()));
        assert!(tables.contains(&"questions".to_string()));

        // idempotent
        db::init_db(store.pool()).await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_categories_is_idempotent() {
        let (store, _dir) = setup_test_store().await;
        db::seed_categories(store.pool()).await.unwrap();
        db::seed_categories(store.pool()).await.unwrap();

        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[5].kind, "Sports");
    }

    #[tokio::test]
    async fn test_seed_keeps_existing_labels() {
        let (store, _dir) = setup_test_store().await;
        sqlx::query("INSERT INTO categories (id, type) VALUES (1, 'Physics')")
            .execute(store.pool())
            .await
            .unwrap();
        db::seed_categories(store.pool()).await.unwrap();

        let row = sqlx::query("SELECT type FROM categories WHERE id = 1").fetch_one(store.pool()).await.unwrap();
        assert_eq!(row.get::<String, _>("type"), "Physics");
    }

    #[tokio::test]
    async fn test_question_crud() {
        let (store, _dir) = setup_test_store().await;

        let id = store.insert(new_question("What is 2+2?", "4", 1, 1)).await.unwrap();
        let q = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(q.question, "What is 2+2?");
        assert_eq!(q.answer, "4");
        assert_eq!(q.category, 1);
        assert_eq!(q.difficulty, 1);

        assert!(store.delete_by_id(id).await.unwrap());
        assert!(store.get_by_id(id).await.unwrap().is_none());
        assert!(!store.delete_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let (store, _dir) = setup_test_store().await;
        let first = store.insert(new_question("a", "a", 1, 1)).await.unwrap();
        let second = store.insert(new_question("b", "b", 1, 1)).await.unwrap();
        assert!(second > first);

        store.delete_by_id(second).await.unwrap();
        let third = store.insert(new_question("c", "c", 1, 1)).await.unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_list_by_category_is_ordered() {
        let (store, _dir) = setup_test_store().await;
        let a = store.insert(new_question("a", "a", 2, 1)).await.unwrap();
        store.insert(new_question("b", "b", 3, 1)).await.unwrap();
        let c = store.insert(new_question("c", "c", 2, 1)).await.unwrap();

        let ids: Vec<i64> = store.list_by_category(2).await.unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(store.list_all().await.unwrap().len(), 3);
        assert!(store.list_by_category(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_substring_search_is_case_sensitive_and_literal() {
        let (store, _dir) = setup_test_store().await;
        store.insert(new_question("What is the Title?", "x", 1, 1)).await.unwrap();
        store.insert(new_question("what is the title?", "x", 1, 1)).await.unwrap();
        store.insert(new_question("Is 100% a lot?", "x", 1, 1)).await.unwrap();

        assert_eq!(store.list_by_substring("Title").await.unwrap().len(), 1);
        assert_eq!(store.list_by_substring("title").await.unwrap().len(), 1);
        assert_eq!(store.list_by_substring("%").await.unwrap().len(), 1);
        assert_eq!(store.list_by_substring("_").await.unwrap().len(), 0);
        assert_eq!(store.list_by_substring("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_ping() {
        let (store, _dir) = setup_test_store().await;
        store.ping().await.unwrap();
    }
}
