//! Store error taxonomy.

use thiserror::Error;

use crate::schema::ValidationErrors;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures a store operation can produce.
///
/// The set is closed: the HTTP layer matches it exhaustively when mapping
/// to status codes.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The candidate document violates one or more collection rules.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// No record exists under the requested id.
    #[error("Contact not found")]
    NotFound,

    /// The backend failed or is unreachable. The message is passed through
    /// verbatim to the client.
    #[error("{0}")]
    Backend(String),
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors)
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
