//! Read-only compositions spanning several collections.

use serde::Serialize;

use crate::models::{Character, Story, World};
use crate::repositories::{CharacterRepo, StoryRepo, WorldRepo};
use crate::store::{DocumentStore, StoreError};

/// A story together with every character referencing it and its world.
#[derive(Debug, Clone, Serialize)]
pub struct StoryFull {
    pub story: Story,
    pub characters: Vec<Character>,
    /// `None` when the story has no `world_id` or the world no longer exists.
    pub world: Option<World>,
}

/// Load a story with its characters and linked world.
///
/// Returns `None` if the story does not exist. The three reads are
/// independent; a concurrent write may be observed by some and not others.
pub async fn load_story_full(
    store: &dyn DocumentStore,
    story_id: &str,
) -> Result<Option<StoryFull>, StoreError> {
    let Some(story) = StoryRepo::find_by_id(store, story_id).await? else {
        return Ok(None);
    };

    let characters = CharacterRepo::list(store, Some(story_id)).await?;

    let world = match story.world_id.as_deref() {
        Some(world_id) => {
            let world = WorldRepo::find_by_id(store, world_id).await?;
            if world.is_none() {
                tracing::debug!(story_id, world_id, "Story references a missing world");
            }
            world
        }
        None => None,
    };

    Ok(Some(StoryFull {
        story,
        characters,
        world,
    }))
}
