use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::service_request::{self, Entity as ServiceRequest};

/// RequestStore manages the service request log
pub struct RequestStore {
    db: DatabaseConnection,
}

impl RequestStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: service_request::ActiveModel,
    ) -> Result<service_request::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_service_request", e))
    }

    pub async fn list(&self) -> Result<Vec<service_request::Model>, InternalError> {
        ServiceRequest::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_service_requests", e))
    }

    pub async fn list_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<service_request::Model>, InternalError> {
        ServiceRequest::find()
            .filter(service_request::Column::AccountId.eq(account_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_service_requests_by_account", e))
    }
}
