use serde::{Deserialize, Serialize};

use crate::types::db::account::AccountType;

/// JWT claim set carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,

    /// Account email
    pub email: String,

    /// Account type ("guard" or "resident")
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued-at time (Unix timestamp)
    pub iat: i64,
}
