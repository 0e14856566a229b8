use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::report::{self, Entity as Report};

/// ReportStore manages the incident report log
pub struct ReportStore {
    db: DatabaseConnection,
}

impl ReportStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: report::ActiveModel,
    ) -> Result<report::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_report", e))
    }

    pub async fn list(&self) -> Result<Vec<report::Model>, InternalError> {
        Report::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_reports", e))
    }

    pub async fn list_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<report::Model>, InternalError> {
        Report::find()
            .filter(report::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_reports_by_account", e))
    }
}
