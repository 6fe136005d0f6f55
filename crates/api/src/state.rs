use std::sync::Arc;

use storyforge_db::{DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreError};

use crate::config::{ServerConfig, StoreBackend};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store handle is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding every entity collection.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Open the configured store. For Postgres this connects, verifies the
    /// connection and applies migrations before returning.
    pub async fn connect(config: &ServerConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn DocumentStore> = match &config.store {
            StoreBackend::Postgres {
                database_url,
                max_connections,
            } => {
                let pool = storyforge_db::create_pool(database_url, *max_connections).await?;
                tracing::info!("Database connection pool created");

                storyforge_db::health_check(&pool).await?;
                tracing::info!("Database health check passed");

                storyforge_db::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");

                Arc::new(PgDocumentStore::new(pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory document store; data will not survive restarts");
                Arc::new(MemoryDocumentStore::new())
            }
        };
        Ok(Self::new(store))
    }
}
