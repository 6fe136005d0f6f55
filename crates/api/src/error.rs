use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storyforge_core::error::CoreError;
use storyforge_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storyforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `storyforge_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as JSON of the expected shape.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                )
            }
            AppError::Core(CoreError::Validation {
                message,
                fields: rejected,
            }) => {
                fields = Some(rejected.clone());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    message.clone(),
                )
            }

            // --- Storage errors ---
            AppError::Store(StoreError::WriteNotAcknowledged { collection }) => {
                tracing::error!(%collection, "Write was not acknowledged by the store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    format!("Failed to write to {collection}"),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Request body errors ---
            AppError::Body(rejection) => {
                let status = rejection.status();
                let code = if status == StatusCode::UNPROCESSABLE_ENTITY {
                    "VALIDATION_ERROR"
                } else {
                    "BAD_REQUEST"
                };
                (status, code, rejection.body_text())
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}
