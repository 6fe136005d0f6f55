//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the stored document
//! - A `Deserialize` + `Validate` create DTO
//! - An update DTO (all `Option` fields) that serializes only the fields present
//!
//! Free-text sub-groups derive `Default` and deserialize with
//! `#[serde(default)]`, so every sub-group field always has a concrete value.

pub mod character;
pub mod story;
pub mod world;

use serde::de::DeserializeOwned;
use serde::Serialize;
use storyforge_core::types::{EntityId, Timestamp};
use validator::Validate;

use crate::store::Collection;

pub use character::Character;
pub use story::Story;
pub use world::World;

/// An entity type persisted in its own document collection.
///
/// Implemented once per entity shape; the generic repository and HTTP
/// handlers are written against this trait.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Inbound payload for `create`.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Inbound payload for partial `update`. Serializes to exactly the
    /// fields that should be overwritten.
    type Update: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    const COLLECTION: Collection;
    /// Human-readable entity name used in error messages.
    const NAME: &'static str;
    /// Weak-reference field that list operations can filter on.
    const REFERENCE_FIELD: &'static str;

    /// Materialize a full entity from a create payload, filling every
    /// omitted sub-group with its default and stamping both timestamps.
    fn from_create(id: EntityId, now: Timestamp, input: Self::Create) -> Self;

    fn id(&self) -> &str;

    fn updated_at(&self) -> Timestamp;
}
