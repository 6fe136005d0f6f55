//! Document storage contract.
//!
//! Every entity lives in its own collection of JSON documents addressed by
//! the document's `id` field. Backends only need to support single-document
//! atomicity: insert, point lookup, equality-filtered scan, top-level field
//! overwrite, and delete.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored document: always a JSON object.
pub type Document = Map<String, Value>;

/// The collections known to the store, one per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Characters,
    Worlds,
    Stories,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Characters,
        Collection::Worlds,
        Collection::Stories,
    ];

    /// Collection name, also used as the backing table name.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Characters => "characters",
            Collection::Worlds => "worlds",
            Collection::Stories => "stories",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Equality filter on a top-level string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: &'static str,
    pub value: String,
}

impl FieldFilter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Whether `doc` holds exactly this string value in the filtered field.
    /// Documents with a missing or `null` field never match.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(self.field).and_then(Value::as_str) == Some(self.value.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// The backend did not confirm that an insert took effect.
    #[error("Write to {collection} was not acknowledged")]
    WriteNotAcknowledged { collection: Collection },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Expected a JSON object for a {collection} document")]
    NotAnObject { collection: Collection },
}

/// Storage backend holding the three entity collections.
///
/// The handle is constructed once at startup, shared through application
/// state, and released with [`DocumentStore::close`] during shutdown.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Insert a new document. Fails with [`StoreError::WriteNotAcknowledged`]
    /// if a document with the same id already exists.
    async fn insert(
        &self,
        collection: Collection,
        id: &str,
        doc: Document,
    ) -> Result<(), StoreError>;

    async fn find_one(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Return up to `limit` documents, optionally restricted by `filter`.
    /// Order is unspecified.
    async fn find(
        &self,
        collection: Collection,
        filter: Option<&FieldFilter>,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Overwrite each top-level key in `patch` on the document with `id`.
    /// Nested objects are replaced wholesale, never merged.
    ///
    /// Returns `true` if a document matched, whether or not any value
    /// actually changed.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError>;

    /// Remove the document with `id`. Returns `true` if one was removed.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;

    /// Release the underlying connection(s).
    async fn close(&self);
}
