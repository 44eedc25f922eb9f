//! Document store errors
//!
//! Every error here is recoverable: the caller corrects its input or
//! refreshes its view, and no store state changed.

use std::fmt;

use thiserror::Error;

/// Draft field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Nombre,
    Tipo,
    Categoria,
    Subcategoria,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Nombre => "nombre",
            Field::Tipo => "tipo",
            Field::Categoria => "categoria",
            Field::Subcategoria => "subcategoria",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Errors returned by [`crate::DocumentStore`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required value is missing or the category/subcategory pair is invalid
    #[error("Invalid '{field}': {message}")]
    Validation { field: Field, message: String },

    /// The referenced document does not exist (stale caller state)
    #[error("Document not found: '{id}'")]
    NotFound { id: String },
}

impl StoreError {
    pub(crate) fn validation(field: Field, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<Field> {
        match self {
            StoreError::Validation { field, .. } => Some(*field),
            StoreError::NotFound { .. } => None,
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::Validation { .. } => "Correct the value and submit again.",
            StoreError::NotFound { .. } => {
                "The document may have been deleted. Refresh the list and try again."
            }
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
