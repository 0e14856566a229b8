use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::notification::{self, Entity as Notification};

/// NotificationStore manages the notification log
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: notification::ActiveModel,
    ) -> Result<notification::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_notification", e))
    }

    pub async fn list(&self) -> Result<Vec<notification::Model>, InternalError> {
        Notification::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_notifications", e))
    }

    pub async fn list_by_audience(
        &self,
        audience: &str,
    ) -> Result<Vec<notification::Model>, InternalError> {
        Notification::find()
            .filter(notification::Column::Audience.eq(audience))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_notifications_by_audience", e))
    }
}
