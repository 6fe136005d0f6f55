//! Route definitions for the `/stories` resource.

use axum::routing::get;
use axum::Router;
use storyforge_db::models::Story;

use crate::handlers::story;
use crate::routes::entity;
use crate::state::AppState;

/// Generic CRUD routes plus:
///
/// ```text
/// GET    /{id}/full    -> get_full
/// ```
pub fn router() -> Router<AppState> {
    entity::router::<Story>().route("/{id}/full", get(story::get_full))
}
