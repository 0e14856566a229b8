use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::account::{self, AccountStatus, AccountType, CreatedBy};

/// Public projection of an account. The stored password hash is never part
/// of this view, so every read path that maps through it cannot leak it.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    /// Account id (UUID)
    pub id: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Optional middle name
    pub middlename: Option<String>,

    /// Email address (globally unique)
    pub email: String,

    /// Contact string
    pub contact: String,

    /// Account type
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Lifecycle status
    pub status: AccountStatus,

    /// Residency block (absent for guards)
    pub block: Option<String>,

    /// Residency house id (absent for guards)
    pub house_id: Option<String>,

    /// Which path created the account
    pub created_by: CreatedBy,

    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

impl From<account::Model> for AccountView {
    fn from(m: account::Model) -> Self {
        Self {
            id: m.id,
            firstname: m.firstname,
            lastname: m.lastname,
            middlename: m.middlename,
            email: m.email,
            contact: m.contact,
            account_type: m.account_type,
            status: m.status,
            block: m.block,
            house_id: m.house_id,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}

/// Request model for admin-initiated account creation
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateAccountRequest {
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

    /// Account type; residents additionally require block and houseId
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Residency block (required for residents)
    pub block: Option<String>,

    /// Residency house id (required for residents)
    pub house_id: Option<String>,

    /// Optional initial password; without one the account cannot log in
    /// via password until a password is set
    pub password: Option<String>,

    /// Status override; defaults to Active
    pub status: Option<AccountStatus>,
}

/// Request model for partial account update. Omitted fields are untouched;
/// an empty string counts as omitted except for middlename, which accepts
/// explicit clearing.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// New first name
    pub firstname: Option<String>,

    /// New last name
    pub lastname: Option<String>,

    /// New middle name; an empty string clears it
    pub middlename: Option<String>,

    /// New email address (re-checked for uniqueness)
    pub email: Option<String>,

    /// New contact string
    pub contact: Option<String>,

    /// New account type; switching to guard clears block and houseId
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,

    /// New residency block
    pub block: Option<String>,

    /// New residency house id
    pub house_id: Option<String>,

    /// New lifecycle status
    pub status: Option<AccountStatus>,

    /// New password (stored hashed)
    pub password: Option<String>,
}

/// Confirmation returned by account deletion
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteAccountResponse {
    /// Success message
    pub message: String,
}

/// API response for account creation
#[derive(ApiResponse)]
pub enum CreatedAccountResponse {
    /// Account created
    #[oai(status = 201)]
    Created(Json<AccountView>),
}
