use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::InternalError;
use crate::types::db::construction::{self, Entity as Construction};

/// ConstructionStore manages the construction permit log
pub struct ConstructionStore {
    db: DatabaseConnection,
}

impl ConstructionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        model: construction::ActiveModel,
    ) -> Result<construction::Model, InternalError> {
        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_construction", e))
    }

    pub async fn list(&self) -> Result<Vec<construction::Model>, InternalError> {
        Construction::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_constructions", e))
    }

    pub async fn list_by_block(
        &self,
        block: &str,
    ) -> Result<Vec<construction::Model>, InternalError> {
        Construction::find()
            .filter(construction::Column::Block.eq(block))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_constructions_by_block", e))
    }
}
