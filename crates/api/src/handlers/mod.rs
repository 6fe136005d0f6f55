//! Request handlers.
//!
//! [`entity`] provides the generic create / list / get / update / delete
//! handlers, instantiated once per entity type by the route tree. Handlers
//! delegate to the repositories in `storyforge_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod entity;
pub mod info;
pub mod story;
