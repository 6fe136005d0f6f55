//! Story-specific handlers beyond generic CRUD.

use axum::extract::{Path, State};
use axum::Json;
use storyforge_core::error::CoreError;
use storyforge_core::types::EntityId;
use storyforge_db::aggregates::{load_story_full, StoryFull};
use storyforge_db::models::{Entity, Story};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/stories/{id}/full
///
/// The story, every character whose `story_id` points at it, and its
/// linked world (`null` if unset or dangling).
pub async fn get_full(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<StoryFull>> {
    let full = load_story_full(state.store.as_ref(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: Story::NAME,
            id,
        }))?;
    Ok(Json(full))
}
