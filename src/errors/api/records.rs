use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Error type shared by the simple record logs (payments, reports,
/// emergencies, service requests, constructions, notifications).
#[derive(ApiResponse, Debug)]
pub enum RecordError {
    /// Missing or invalid required field
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl RecordError {
    /// Create a Validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        RecordError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError
    pub fn internal(message: String) -> Self {
        RecordError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            RecordError::Validation(json) => json.0.message.clone(),
            RecordError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
