use crate::types::EntityId;
use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The operation targeted an identifier with no stored entity.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// An inbound payload failed field-level validation.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },
}

impl CoreError {
    /// Shorthand for a validation failure without field-level detail.
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }
}
