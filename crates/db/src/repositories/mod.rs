//! Repository layer.
//!
//! One generic repository, [`EntityRepo`], instantiated per entity type.
//! Methods are associated functions that accept `&dyn DocumentStore` as the
//! first argument.

pub mod entity_repo;

pub use entity_repo::EntityRepo;

use crate::models::{Character, Story, World};

pub type CharacterRepo = EntityRepo<Character>;
pub type WorldRepo = EntityRepo<World>;
pub type StoryRepo = EntityRepo<Story>;
