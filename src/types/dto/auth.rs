use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::account::{AccountStatus, AccountType};
use crate::types::dto::accounts::AccountView;

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address used at registration
    pub email: String,

    /// Plaintext password to verify
    pub password: String,
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed JWT (24-hour expiry) carrying id, email and type
    pub token: String,

    /// Public projection of the authenticated account
    pub user: AccountView,
}

/// Request model for self-service registration
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountRequest {
    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Optional middle name
    pub middlename: Option<String>,

    /// Email address (must be unique)
    pub email: String,

    /// Contact string
    pub contact: String,

    /// Password (mandatory for self-registration)
    pub password: String,

    /// Residency block; defaults to the "Pending" placeholder
    pub block: Option<String>,

    /// Residency house id; defaults to the "Pending" placeholder
    pub house_id: Option<String>,
}

/// Reduced projection returned after self-registration. Deliberately
/// carries no id and no credential material.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisteredAccountView {
    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Email address
    pub email: String,

    /// Lifecycle status (always Pending for self-registration)
    pub status: AccountStatus,
}

/// Response model for self-service registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Pending-approval message
    pub message: String,

    /// Reduced account projection
    pub user: RegisteredAccountView,
}

/// API response for self-service registration
#[derive(ApiResponse)]
pub enum RegisteredResponse {
    /// Account registered, awaiting administrator approval
    #[oai(status = 201)]
    Created(Json<RegisterResponse>),
}

/// Response model for the bearer-token identity endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// Account id from the token
    pub id: String,

    /// Email from the token
    pub email: String,

    /// Account type from the token
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Token expiration (Unix timestamp)
    pub expires_at: i64,
}
