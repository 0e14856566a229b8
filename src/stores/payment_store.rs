use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::payment::{self, Entity as Payment};

/// PaymentStore manages the utility payment log
pub struct PaymentStore {
    db: DatabaseConnection,
}

impl PaymentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: payment::ActiveModel,
    ) -> Result<payment::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_payment", e))
    }

    pub async fn list(&self) -> Result<Vec<payment::Model>, InternalError> {
        Payment::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_payments", e))
    }

    pub async fn list_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<payment::Model>, InternalError> {
        Payment::find()
            .filter(payment::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_payments_by_account", e))
    }
}
