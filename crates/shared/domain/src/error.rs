//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required input field is missing or malformed
    #[error("{message}")]
    Validation { field: String, message: String },

    /// A referenced entity does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Stored data breaks an invariant the caller relied on.
    /// `message` is safe to show to clients; `detail` is for logs only.
    #[error("Data integrity violation: {detail}")]
    DataIntegrity { message: String, detail: String },
}

impl DomainError {
    /// Create a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a data integrity error
    pub fn data_integrity(message: impl Into<String>, detail: impl Into<String>) -> Self {
        DomainError::DataIntegrity {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Name of the offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            DomainError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
