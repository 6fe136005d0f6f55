//! World entity model and DTOs.

use serde::{Deserialize, Serialize};
use storyforge_core::types::{EntityId, Timestamp};
use validator::Validate;

use crate::models::Entity;
use crate::store::Collection;

/// Physical setting and the rules of the world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGeography {
    /// Urban, rural, fantasy, sci-fi, historical, ...
    pub setting_type: String,
    pub climate_weather: String,
    pub time_period: String,
    pub technology_level: String,
    pub magic_supernatural: String,
    pub physics_rules: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGovernance {
    pub political_system: String,
    pub laws_justice: String,
    pub economic_system: String,
    pub cultural_norms: String,
    pub religions_beliefs: String,
    pub festivals_rituals: String,
    pub social_hierarchies: String,
    pub languages_dialects: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConflict {
    pub major_conflict: String,
    pub faction_breakdown: String,
    pub hidden_powers: String,
    pub law_enforcement: String,
    pub weapons_combat: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldCulture {
    pub view_of_death: String,
    pub view_of_time: String,
    pub honor_vs_survival: String,
    pub individual_vs_collective: String,
    pub emotion_expression: String,
}

/// Stored under the `modern_aspects` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldModern {
    pub media_propaganda: String,
    pub surveillance_level: String,
    pub internet_info_access: String,
    pub popular_culture: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldThemes {
    pub emotional_vibe: String,
    pub symbolic_motifs: String,
    pub historical_trauma: String,
    pub truth_power_holders: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDetails {
    pub architecture: String,
    pub fashion_trends: String,
    pub transportation: String,
    pub food_culture: String,
    pub street_sounds_smells: String,
}

/// A world document from the `worlds` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub genre: String,
    /// Realistic, fantasy, sci-fi, historical, ...
    #[serde(default)]
    pub world_type: String,
    #[serde(default)]
    pub geography: WorldGeography,
    #[serde(default)]
    pub governance: WorldGovernance,
    #[serde(default)]
    pub conflict: WorldConflict,
    #[serde(default)]
    pub culture: WorldCulture,
    #[serde(default)]
    pub modern_aspects: WorldModern,
    #[serde(default)]
    pub themes: WorldThemes,
    #[serde(default)]
    pub details: WorldDetails,
    /// Weak reference to a story. Never checked for existence.
    #[serde(default)]
    pub story_id: Option<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new world.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWorld {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub world_type: String,
    pub geography: Option<WorldGeography>,
    pub governance: Option<WorldGovernance>,
    pub conflict: Option<WorldConflict>,
    pub culture: Option<WorldCulture>,
    pub modern_aspects: Option<WorldModern>,
    pub themes: Option<WorldThemes>,
    pub details: Option<WorldDetails>,
    pub story_id: Option<EntityId>,
}

/// DTO for updating an existing world. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorld {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<WorldGeography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governance: Option<WorldGovernance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<WorldConflict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<WorldCulture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modern_aspects: Option<WorldModern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<WorldThemes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<WorldDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<EntityId>,
}

impl Entity for World {
    type Create = CreateWorld;
    type Update = UpdateWorld;

    const COLLECTION: Collection = Collection::Worlds;
    const NAME: &'static str = "World";
    const REFERENCE_FIELD: &'static str = "story_id";

    fn from_create(id: EntityId, now: Timestamp, input: CreateWorld) -> Self {
        World {
            id,
            name: input.name,
            genre: input.genre,
            world_type: input.world_type,
            geography: input.geography.unwrap_or_default(),
            governance: input.governance.unwrap_or_default(),
            conflict: input.conflict.unwrap_or_default(),
            culture: input.culture.unwrap_or_default(),
            modern_aspects: input.modern_aspects.unwrap_or_default(),
            themes: input.themes.unwrap_or_default(),
            details: input.details.unwrap_or_default(),
            story_id: input.story_id,
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
