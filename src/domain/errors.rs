//! Domain errors for the clientele customer service.

use thiserror::Error;

/// Domain-level errors that can occur in the customer service.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Store rejected write for {id}: {rows} rows affected")]
    StoreRejected { id: String, rows: u64 },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DomainError {
    /// True for "the record does not exist" outcomes, which callers
    /// typically map to a not-found signal rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CustomerNotFound(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
