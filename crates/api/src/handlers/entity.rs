//! Generic CRUD handlers shared by `/characters`, `/worlds` and `/stories`.

use axum::extract::{Path, Query, State};
use axum::Json;
use storyforge_core::error::CoreError;
use storyforge_core::types::EntityId;
use storyforge_db::models::Entity;
use storyforge_db::repositories::EntityRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::ReferenceFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found<E: Entity>(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::NAME,
        id,
    })
}

/// POST /api/{entities}
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<E::Create>,
) -> AppResult<Json<E>> {
    let entity = EntityRepo::<E>::create(state.store.as_ref(), input).await?;
    tracing::info!(entity = E::NAME, id = entity.id(), "Created");
    Ok(Json(entity))
}

/// GET /api/{entities}?{reference_field}=
pub async fn list<E: Entity>(
    State(state): State<AppState>,
    Query(params): Query<ReferenceFilterParams>,
) -> AppResult<Json<Vec<E>>> {
    let reference = params.value_for(E::REFERENCE_FIELD);
    let entities = EntityRepo::<E>::list(state.store.as_ref(), reference).await?;
    Ok(Json(entities))
}

/// GET /api/{entities}/{id}
pub async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<E>> {
    let entity = EntityRepo::<E>::find_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(entity))
}

/// PUT /api/{entities}/{id}
///
/// Partial update: only fields present and non-null in the body change.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(input): ValidatedJson<E::Update>,
) -> AppResult<Json<E>> {
    let entity = EntityRepo::<E>::update(state.store.as_ref(), &id, &input)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(entity = E::NAME, id = entity.id(), "Updated");
    Ok(Json(entity))
}

/// DELETE /api/{entities}/{id}
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = EntityRepo::<E>::delete(state.store.as_ref(), &id).await?;
    if deleted {
        tracing::info!(entity = E::NAME, id = %id, "Deleted");
        Ok(Json(MessageResponse::new(format!(
            "{} deleted successfully",
            E::NAME
        ))))
    } else {
        Err(not_found::<E>(id))
    }
}
