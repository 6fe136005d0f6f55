//! Shared domain types for the Storyforge backend.
//!
//! Everything here is storage- and transport-agnostic: identifier and
//! timestamp types, the domain error enum, and field-level validation
//! helpers used by both the repository and HTTP layers.

pub mod error;
pub mod types;
pub mod validation;

/// Upper bound on the number of documents any list operation returns.
///
/// There is no pagination; callers needing more than this must not rely
/// on list endpoints.
pub const MAX_LIST_RESULTS: i64 = 1000;
