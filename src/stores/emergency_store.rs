use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::emergency::{self, Entity as Emergency};

/// EmergencyStore manages the emergency log
pub struct EmergencyStore {
    db: DatabaseConnection,
}

impl EmergencyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: emergency::ActiveModel,
    ) -> Result<emergency::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_emergency", e))
    }

    pub async fn list(&self) -> Result<Vec<emergency::Model>, InternalError> {
        Emergency::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_emergencies", e))
    }

    pub async fn list_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<emergency::Model>, InternalError> {
        Emergency::find()
            .filter(emergency::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_emergencies_by_account", e))
    }
}
