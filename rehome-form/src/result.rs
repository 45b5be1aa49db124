//! Validation result types.

use serde::Serialize;
use thiserror::Error;

/// Information about a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field name (from the `.field()` call).
    pub field: String,
    /// Error message for the first violated rule.
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors, in field insertion order.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the message for a named field, or `""` if the field passed.
    ///
    /// The empty string doubles as the "nothing to display" verdict for
    /// the rendering layer, so this never returns an `Option`.
    pub fn message_for(&self, field: &str) -> &str {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map_or("", |e| e.message.as_str())
    }
}
