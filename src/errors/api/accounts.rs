use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Account management error types
#[derive(ApiResponse, Debug)]
pub enum AccountError {
    /// Missing or invalid required field
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Email already belongs to another account
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Account id does not resolve
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AccountError {
    /// Create a Validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        AccountError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AccountError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email already in use".to_string(),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        AccountError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Account not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal(message: String) -> Self {
        AccountError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AccountError::Validation(json) => json.0.message.clone(),
            AccountError::DuplicateEmail(json) => json.0.message.clone(),
            AccountError::NotFound(json) => json.0.message.clone(),
            AccountError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
