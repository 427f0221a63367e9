use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::metrics::Metrics;
use crate::store::{MemoryStore, QuestionStore, SqliteStore};

/// The shared application state.
///
/// Cloned into every handler by axum; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend selected by `database.backend`.
    pub store: Arc<dyn QuestionStore>,
    pub config: Arc<AppConfig>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, config: AppConfig) -> Self {
        Self { store, config: Arc::new(config), metrics: Metrics::new() }
    }

    /// Opens the configured backend, creating the schema and seeding categories as configured.
    pub async fn open(config: AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn QuestionStore> = match config.database.backend {
            StorageBackend::Sqlite => {
                let pool = crate::db::connect(&config.database).await?;
                crate::db::init_db(&pool).await?;
                if config.database.seed_categories {
                    crate::db::seed_categories(&pool).await?;
                }
                Arc::new(SqliteStore::new(pool))
            }
            StorageBackend::Memory => {
                if config.database.seed_categories {
                    Arc::new(MemoryStore::with_default_categories())
                } else {
                    Arc::new(MemoryStore::new())
                }
            }
        };
        Ok(Self::new(store, config))
    }
}
