//! Generic route definitions for an entity collection.

use axum::routing::get;
use axum::Router;
use storyforge_db::models::Entity;

use crate::handlers::entity;
use crate::state::AppState;

/// Routes mounted at the collection path, e.g. `/characters`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router<E: Entity>() -> Router<AppState> {
    Router::new()
        .route("/", get(entity::list::<E>).post(entity::create::<E>))
        .route(
            "/{id}",
            get(entity::get_by_id::<E>)
                .put(entity::update::<E>)
                .delete(entity::delete::<E>),
        )
}
