use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints must convert to the api error enums.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Storage-level unique constraint rejected a write. The constraint is
    /// the authority for uniqueness; the application pre-check only exists
    /// for a friendlier error message.
    #[error("Unique constraint violated on {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn unique_violation(constraint: &str) -> InternalError {
        InternalError::UniqueViolation {
            constraint: constraint.to_string(),
        }
    }

    pub fn crypto(operation: &str, message: impl Into<String>) -> InternalError {
        InternalError::Crypto {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}
