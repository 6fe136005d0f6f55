use chrono::{Duration, Utc};

/// Entity identifiers are server-generated UUID v4 strings.
///
/// They are distinct from any storage-native row key, and weak references
/// between entities (`story_id`, `world_id`, `character_ids`) use the same
/// type without any existence guarantee.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<Utc>;

/// Generate a fresh entity identifier.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

/// Current time for stamping a freshly created entity.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Timestamp for an update to an entity last stamped at `previous`.
///
/// Returns the current time, or `previous + 1µs` if the clock has not
/// advanced past it, so `updated_at` strictly increases across updates.
pub fn next_timestamp(previous: Timestamp) -> Timestamp {
    let current = Utc::now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}
