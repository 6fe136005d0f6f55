//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Weak-reference filters accepted by list endpoints
/// (`?story_id=` for characters and worlds, `?world_id=` for stories).
///
/// Each entity only honours the parameter for its own reference field;
/// the other is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ReferenceFilterParams {
    pub story_id: Option<String>,
    pub world_id: Option<String>,
}

impl ReferenceFilterParams {
    /// Value supplied for `field`, if any.
    pub fn value_for(&self, field: &str) -> Option<&str> {
        match field {
            "story_id" => self.story_id.as_deref(),
            "world_id" => self.world_id.as_deref(),
            _ => None,
        }
    }
}
