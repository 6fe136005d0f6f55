//! In-process document store.
//!
//! Backs local development (`STORE_BACKEND=memory`) and the test suites.
//! Contents are lost when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::store::{Collection, Document, DocumentStore, FieldFilter, StoreError};

#[derive(Debug)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, IndexMap<String, Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        let collections = Collection::ALL
            .into_iter()
            .map(|c| (c, IndexMap::new()))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Number of documents currently held in `collection`.
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, IndexMap::len)
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(
        &self,
        collection: Collection,
        id: &str,
        doc: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if docs.contains_key(id) {
            return Err(StoreError::WriteNotAcknowledged { collection });
        }
        docs.insert(id.to_string(), doc);
        Ok(())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Option<&FieldFilter>,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(&collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .values()
            .filter(|doc| filter.map_or(true, |f| f.matches(doc)))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Document,
    ) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.get_mut(id))
        else {
            return Ok(false);
        };
        for (key, value) in patch {
            doc.insert(key, value);
        }
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(&collection)
            .and_then(|docs| docs.shift_remove(id))
            .is_some())
    }

    async fn close(&self) {
        tracing::debug!("In-memory document store released");
    }
}
