//! PostgreSQL document store.
//!
//! Each collection is a table of `(id TEXT PRIMARY KEY, doc JSONB)` rows
//! created by the embedded migrations. Partial updates use JSONB top-level
//! concatenation (`doc || patch`), which overwrites whole keys and so
//! replaces nested sub-groups rather than merging them.

use async_trait::async_trait;
use sqlx::types::Json;

use crate::store::{Collection, Document, DocumentStore, FieldFilter, StoreError};
use crate::DbPool;

pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert(
        &self,
        collection: Collection,
        id: &str,
        doc: Document,
    ) -> Result<(), StoreError> {
        let query = format!(
            "INSERT INTO {collection} (id, doc) VALUES ($1, $2)
             ON CONFLICT (id) DO NOTHING"
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(Json(&doc))
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::WriteNotAcknowledged { collection });
        }
        Ok(())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let query = format!("SELECT doc FROM {collection} WHERE id = $1");
        let doc = sqlx::query_scalar::<_, Json<Document>>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|Json(doc)| doc))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Option<&FieldFilter>,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let docs = match filter {
            Some(filter) => {
                let query =
                    format!("SELECT doc FROM {collection} WHERE doc ->> $1 = $2 LIMIT $3");
                sqlx::query_scalar::<_, Json<Document>>(&query)
                    .bind(filter.field)
                    .bind(&filter.value)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT doc FROM {collection} LIMIT $1");
                sqlx::query_scalar::<_, Json<Document>>(&query)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(docs.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError> {
        let query = format!("UPDATE {collection} SET doc = doc || $2 WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(Json(&patch))
            .execute(&self.pool)
            .await?;
        // Postgres counts matched rows, so an update that rewrites identical
        // values still reports 1.
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let query = format!("DELETE FROM {collection} WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
