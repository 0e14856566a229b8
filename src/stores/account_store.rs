use std::collections::BTreeSet;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::account::{self, AccountType, Entity as Account};

/// Placeholder residency value assigned at self-registration until an
/// administrator fills in the real block and house.
pub const PENDING_PLACEHOLDER: &str = "Pending";

/// AccountStore manages the account collection
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create a new AccountStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new account
    ///
    /// A unique-key rejection on email surfaces as `UniqueViolation` so the
    /// caller can map it to a conflict even when the pre-check raced.
    pub async fn insert(
        &self,
        model: account::ActiveModel,
    ) -> Result<account::Model, InternalError> {
        model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::unique_violation("accounts.email")
            } else {
                InternalError::database("insert_account", e)
            }
        })
    }

    /// Apply an update to an existing account
    pub async fn update(
        &self,
        model: account::ActiveModel,
    ) -> Result<account::Model, InternalError> {
        model.update(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::unique_violation("accounts.email")
            } else {
                InternalError::database("update_account", e)
            }
        })
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<account::Model>, InternalError> {
        Account::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_account_by_id", e))
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<account::Model>, InternalError> {
        Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_account_by_email", e))
    }

    /// True when the email belongs to an account other than `own_id`
    pub async fn email_taken_by_other(
        &self,
        email: &str,
        own_id: &str,
    ) -> Result<bool, InternalError> {
        let existing = Account::find()
            .filter(account::Column::Email.eq(email))
            .filter(account::Column::Id.ne(own_id))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("email_taken_by_other", e))?;

        Ok(existing.is_some())
    }

    pub async fn list(&self) -> Result<Vec<account::Model>, InternalError> {
        Account::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_accounts", e))
    }

    pub async fn list_by_block_and_house(
        &self,
        block: &str,
        house_id: &str,
    ) -> Result<Vec<account::Model>, InternalError> {
        Account::find()
            .filter(account::Column::Block.eq(block))
            .filter(account::Column::HouseId.eq(house_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_accounts_by_block_and_house", e))
    }

    /// Delete an account by id, returning whether a row was removed
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, InternalError> {
        let result = Account::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_account", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Distinct blocks of resident accounts, skipping the placeholder
    /// assigned at self-registration
    pub async fn distinct_resident_blocks(&self) -> Result<Vec<String>, InternalError> {
        let residents = Account::find()
            .filter(account::Column::AccountType.eq(AccountType::Resident))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("distinct_resident_blocks", e))?;

        let blocks: BTreeSet<String> = residents
            .into_iter()
            .filter_map(|a| a.block)
            .filter(|b| b != PENDING_PLACEHOLDER)
            .collect();

        Ok(blocks.into_iter().collect())
    }
}
