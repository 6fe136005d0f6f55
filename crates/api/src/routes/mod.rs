pub mod entity;
pub mod health;
pub mod story;

use axum::routing::get;
use axum::Router;
use storyforge_db::models::{Character, World};

use crate::handlers::info;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   API info (GET)
///
/// /characters                         list (?story_id=), create
/// /characters/{id}                    get, update, delete
///
/// /worlds                             list (?story_id=), create
/// /worlds/{id}                        get, update, delete
///
/// /stories                            list (?world_id=), create
/// /stories/{id}                       get, update, delete
/// /stories/{id}/full                  story + characters + world (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info::info))
        .nest("/characters", entity::router::<Character>())
        .nest("/worlds", entity::router::<World>())
        .nest("/stories", story::router())
}
