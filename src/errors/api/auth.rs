use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Authentication error types
///
/// Credential and status rejections use 400 per the login surface contract;
/// bearer-token failures on the identity endpoint use 401.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Unknown email, missing stored password, or failed hash comparison.
    /// One message for all three so account existence cannot be probed.
    #[oai(status = 400)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Account is still awaiting administrator approval
    #[oai(status = 400)]
    PendingApproval(Json<ErrorResponse>),

    /// Account is inactive or suspended
    #[oai(status = 400)]
    AccountDisabled(Json<ErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid credentials".to_string(),
            status_code: 400,
        }))
    }

    /// Create a PendingApproval error
    pub fn pending_approval() -> Self {
        AuthError::PendingApproval(Json(ErrorResponse {
            error: "pending_approval".to_string(),
            message: "Your account is pending approval".to_string(),
            status_code: 400,
        }))
    }

    /// Create an AccountDisabled error carrying the lowercase status word
    pub fn account_disabled(status_word: &str) -> Self {
        AuthError::AccountDisabled(Json(ErrorResponse {
            error: "account_disabled".to_string(),
            message: format!("Your account is {}", status_word),
            status_code: 400,
        }))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(ErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed JWT".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(ErrorResponse {
            error: "expired_token".to_string(),
            message: "JWT has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::PendingApproval(json) => json.0.message.clone(),
            AuthError::AccountDisabled(json) => json.0.message.clone(),
            AuthError::InvalidToken(json) => json.0.message.clone(),
            AuthError::ExpiredToken(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
