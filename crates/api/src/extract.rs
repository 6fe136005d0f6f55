//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use storyforge_core::validation::validate_input;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the payload's derived validation
/// rules, so handlers only ever see well-formed input.
///
/// Parse failures and rule violations are both reported through
/// [`AppError`], with field-level detail for the latter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        validate_input(&value)?;
        Ok(ValidatedJson(value))
    }
}
