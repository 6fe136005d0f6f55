//! Generic repository shared by every entity collection.

use std::marker::PhantomData;

use serde::Serialize;
use storyforge_core::types::{new_entity_id, next_timestamp, now};
use storyforge_core::MAX_LIST_RESULTS;

use crate::models::Entity;
use crate::store::{Collection, Document, DocumentStore, FieldFilter, StoreError};

/// Provides CRUD operations for any [`Entity`] type.
///
/// Zero-sized; every method takes the store handle as its first argument.
pub struct EntityRepo<E>(PhantomData<fn() -> E>);

impl<E: Entity> EntityRepo<E> {
    /// Materialize and insert a new entity, returning it as stored.
    ///
    /// The create payload is expected to have been validated already.
    pub async fn create(store: &dyn DocumentStore, input: E::Create) -> Result<E, StoreError> {
        let entity = E::from_create(new_entity_id(), now(), input);
        let doc = to_document(E::COLLECTION, &entity)?;
        store.insert(E::COLLECTION, entity.id(), doc).await?;
        tracing::debug!(collection = %E::COLLECTION, id = entity.id(), "Entity created");
        Ok(entity)
    }

    /// Find an entity by its identifier.
    pub async fn find_by_id(store: &dyn DocumentStore, id: &str) -> Result<Option<E>, StoreError> {
        store
            .find_one(E::COLLECTION, id)
            .await?
            .map(from_document::<E>)
            .transpose()
    }

    /// List entities, optionally only those whose reference field equals
    /// `reference`. An empty reference is treated as no filter.
    ///
    /// Capped at [`MAX_LIST_RESULTS`]; order is unspecified.
    pub async fn list(
        store: &dyn DocumentStore,
        reference: Option<&str>,
    ) -> Result<Vec<E>, StoreError> {
        let filter = reference
            .filter(|value| !value.is_empty())
            .map(|value| FieldFilter::eq(E::REFERENCE_FIELD, value));
        store
            .find(E::COLLECTION, filter.as_ref(), MAX_LIST_RESULTS)
            .await?
            .into_iter()
            .map(from_document::<E>)
            .collect()
    }

    /// Apply a partial update. Only fields present in `input` are written;
    /// `updated_at` is always bumped.
    ///
    /// Returns `None` if no entity with the given `id` exists. Existence is
    /// checked before writing and confirmed by the write's matched count, so
    /// an update that changes nothing but the timestamp still succeeds.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &E::Update,
    ) -> Result<Option<E>, StoreError> {
        let Some(existing) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };

        let mut patch = to_document(E::COLLECTION, input)?;
        let updated_at = next_timestamp(existing.updated_at());
        patch.insert("updated_at".to_string(), serde_json::to_value(updated_at)?);
        let fields: Vec<&str> = patch.keys().map(String::as_str).collect();
        tracing::debug!(collection = %E::COLLECTION, id, ?fields, "Updating entity");

        if !store.update(E::COLLECTION, id, patch).await? {
            // Deleted between the existence check and the write.
            return Ok(None);
        }
        Self::find_by_id(store, id).await
    }

    /// Delete an entity by id. Returns `true` if it existed.
    ///
    /// Never touches other collections; references to the deleted entity
    /// are left dangling.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        let deleted = store.delete(E::COLLECTION, id).await?;
        if deleted {
            tracing::debug!(collection = %E::COLLECTION, id, "Entity deleted");
        }
        Ok(deleted)
    }
}

fn to_document<T: Serialize>(collection: Collection, value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject { collection }),
    }
}

fn from_document<E: Entity>(doc: Document) -> Result<E, StoreError> {
    Ok(serde_json::from_value(serde_json::Value::Object(doc))?)
}
