use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account record. The password hash never leaves the store layer in API
/// responses; all reads go through the public view projection in the DTOs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub middlename: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub contact: String,
    pub account_type: AccountType,
    pub block: Option<String>,
    pub house_id: Option<String>,
    pub status: AccountStatus,
    pub created_by: CreatedBy,
    pub password_hash: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Closed account type set. Guards are exempt from the residency binding;
/// residents always carry block and house_id once created.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    poem_openapi::Enum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[sea_orm(string_value = "guard")]
    Guard,
    #[sea_orm(string_value = "resident")]
    Resident,
}

/// Account lifecycle status. The ActiveEnum mapping makes the persistence
/// layer reject any value outside these four.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    poem_openapi::Enum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AccountStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Suspended")]
    Suspended,
    #[sea_orm(string_value = "Pending")]
    Pending,
}

impl AccountStatus {
    /// Lowercase status word used in login rejection messages.
    pub fn lowercase_word(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Suspended => "suspended",
            AccountStatus::Pending => "pending",
        }
    }
}

/// Which path created the account. Password is mandatory at creation only
/// for self-registered accounts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    poem_openapi::Enum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CreatedBy {
    #[sea_orm(string_value = "admin")]
    #[oai(rename = "admin")]
    #[serde(rename = "admin")]
    Admin,
    // Stored as "self_service"; the wire format stays "self"
    #[sea_orm(string_value = "self_service")]
    #[oai(rename = "self")]
    #[serde(rename = "self")]
    SelfService,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_created_by_storage_values() {
        assert_eq!(CreatedBy::Admin.to_value(), "admin");
        assert_eq!(CreatedBy::SelfService.to_value(), "self_service");
    }

    #[test]
    fn test_created_by_serializes_as_self_on_the_wire() {
        let json = serde_json::to_string(&CreatedBy::SelfService).unwrap();
        assert_eq!(json, "\"self\"");
    }

    #[test]
    fn test_account_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AccountType::Guard).unwrap(), "\"guard\"");
        assert_eq!(
            serde_json::to_string(&AccountType::Resident).unwrap(),
            "\"resident\""
        );
    }
}
