//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use storyforge_core::types::{EntityId, Timestamp};
use validator::Validate;

use crate::models::Entity;
use crate::store::Collection;

/// Beliefs, coping and emotional defences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPsychology {
    pub core_belief_self: String,
    pub core_belief_world: String,
    pub desire_vs_need: String,
    pub primary_coping_mechanism: String,
    pub emotional_blind_spot: String,
    pub trigger_points: String,
    pub emotional_armor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConflicts {
    pub internal_conflict: String,
    pub external_conflict: String,
    pub moral_dilemma: String,
    pub unconscious_fear: String,
    pub biggest_regret: String,
    pub source_of_shame: String,
    pub self_sabotaging_behavior: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterBackground {
    pub defining_childhood_moment: String,
    pub first_major_betrayal: String,
    pub past_love_or_loss: String,
    pub family_role_dynamic: String,
    pub education_street_smarts: String,
    pub criminal_record_secret: String,
}

/// Stored under the `moral_edges` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterMoral {
    pub line_never_cross: String,
    pub worst_thing_done: String,
    pub justification_wrongdoing: String,
    pub villain_origin: String,
    pub self_destruction_path: String,
}

/// Stored under the `social_dynamics` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSocial {
    pub public_vs_private_self: String,
    pub group_role: String,
    pub love_language_attachment: String,
    pub treatment_of_weak: String,
    pub jealousy_triggers: String,
    pub loyalty_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterQuirks {
    pub weird_habits: String,
    pub physical_tics: String,
    pub obsessions_hobbies: String,
    pub voice_speech_pattern: String,
    pub what_makes_laugh: String,
    pub what_makes_cry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterNarrative {
    pub symbol_color_motif: String,
    pub character_arc_word: String,
    pub theme_connection: String,
    pub peak_collapse_timing: String,
    pub ending_feeling: String,
}

/// A character document from the `characters` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub role_in_story: String,
    #[serde(default)]
    pub physical_description: String,
    #[serde(default)]
    pub personal_symbol_object: String,
    #[serde(default)]
    pub psychology: CharacterPsychology,
    #[serde(default)]
    pub conflicts: CharacterConflicts,
    #[serde(default)]
    pub background: CharacterBackground,
    #[serde(default)]
    pub moral_edges: CharacterMoral,
    #[serde(default)]
    pub social_dynamics: CharacterSocial,
    #[serde(default)]
    pub quirks: CharacterQuirks,
    #[serde(default)]
    pub narrative: CharacterNarrative,
    /// Free-form relationship notes.
    #[serde(default)]
    pub relationships: String,
    /// Weak reference to a story. Never checked for existence.
    #[serde(default)]
    pub story_id: Option<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
///
/// A missing `name` deserializes to an empty string so that it is reported
/// by validation with field-level detail rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCharacter {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub role_in_story: String,
    #[serde(default)]
    pub physical_description: String,
    #[serde(default)]
    pub personal_symbol_object: String,
    pub psychology: Option<CharacterPsychology>,
    pub conflicts: Option<CharacterConflicts>,
    pub background: Option<CharacterBackground>,
    pub moral_edges: Option<CharacterMoral>,
    pub social_dynamics: Option<CharacterSocial>,
    pub quirks: Option<CharacterQuirks>,
    pub narrative: Option<CharacterNarrative>,
    #[serde(default)]
    pub relationships: String,
    pub story_id: Option<EntityId>,
}

/// DTO for updating an existing character. All fields are optional;
/// `None` (absent or `null`) leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_in_story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_symbol_object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychology: Option<CharacterPsychology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<CharacterConflicts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<CharacterBackground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moral_edges: Option<CharacterMoral>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_dynamics: Option<CharacterSocial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quirks: Option<CharacterQuirks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<CharacterNarrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<EntityId>,
}

impl Entity for Character {
    type Create = CreateCharacter;
    type Update = UpdateCharacter;

    const COLLECTION: Collection = Collection::Characters;
    const NAME: &'static str = "Character";
    const REFERENCE_FIELD: &'static str = "story_id";

    fn from_create(id: EntityId, now: Timestamp, input: CreateCharacter) -> Self {
        Character {
            id,
            name: input.name,
            age: input.age,
            genre: input.genre,
            role_in_story: input.role_in_story,
            physical_description: input.physical_description,
            personal_symbol_object: input.personal_symbol_object,
            psychology: input.psychology.unwrap_or_default(),
            conflicts: input.conflicts.unwrap_or_default(),
            background: input.background.unwrap_or_default(),
            moral_edges: input.moral_edges.unwrap_or_default(),
            social_dynamics: input.social_dynamics.unwrap_or_default(),
            quirks: input.quirks.unwrap_or_default(),
            narrative: input.narrative.unwrap_or_default(),
            relationships: input.relationships,
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
