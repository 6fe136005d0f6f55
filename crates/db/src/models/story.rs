//! Story entity model and DTOs.

use serde::{Deserialize, Serialize};
use storyforge_core::types::{EntityId, Timestamp};
use validator::Validate;

use crate::models::Entity;
use crate::store::Collection;

/// Status assigned to a story created without one.
///
/// Status is a free-text label; `planning`, `writing`, `draft` and
/// `complete` are conventional but any string is accepted.
pub const DEFAULT_STORY_STATUS: &str = "planning";

fn default_status() -> String {
    DEFAULT_STORY_STATUS.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryStructure {
    pub genre: String,
    pub theme: String,
    pub tone: String,
    pub setting_overview: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryPlot {
    pub premise: String,
    pub inciting_incident: String,
    /// Key story beats.
    pub plot_points: String,
    pub climax: String,
    pub resolution: String,
}

/// A story document from the `stories` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub structure: StoryStructure,
    #[serde(default)]
    pub plot: StoryPlot,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub notes: String,
    /// Ordered weak references to characters. Never checked for existence.
    #[serde(default)]
    pub character_ids: Vec<EntityId>,
    /// Weak reference to a world. A dangling value is tolerated.
    #[serde(default)]
    pub world_id: Option<EntityId>,
    #[serde(default = "default_status")]
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new story.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStory {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub structure: Option<StoryStructure>,
    pub plot: Option<StoryPlot>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub character_ids: Vec<EntityId>,
    pub world_id: Option<EntityId>,
    /// Defaults to [`DEFAULT_STORY_STATUS`] if omitted.
    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for CreateStory {
    fn default() -> Self {
        CreateStory {
            title: String::new(),
            author: String::new(),
            structure: None,
            plot: None,
            synopsis: String::new(),
            notes: String::new(),
            character_ids: Vec::new(),
            world_id: None,
            status: default_status(),
        }
    }
}

/// DTO for updating an existing story. All fields are optional.
///
/// `character_ids`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStory {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StoryStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<StoryPlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_ids: Option<Vec<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Entity for Story {
    type Create = CreateStory;
    type Update = UpdateStory;

    const COLLECTION: Collection = Collection::Stories;
    const NAME: &'static str = "Story";
    const REFERENCE_FIELD: &'static str = "world_id";

    fn from_create(id: EntityId, now: Timestamp, input: CreateStory) -> Self {
        Story {
            id,
            title: input.title,
            author: input.author,
            structure: input.structure.unwrap_or_default(),
            plot: input.plot.unwrap_or_default(),
            synopsis: input.synopsis,
            notes: input.notes,
            character_ids: input.character_ids,
            world_id: input.world_id,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
