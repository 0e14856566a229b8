use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::stores::ConstructionStore;
use crate::types::db::construction;
use crate::types::dto::constructions::{
    ConstructionView, CreateConstructionRequest, CreatedConstructionResponse,
};

/// Construction permit API endpoints
pub struct ConstructionsApi {
    constructions: Arc<ConstructionStore>,
}

impl ConstructionsApi {
    pub fn new(constructions: Arc<ConstructionStore>) -> Self {
        Self { constructions }
    }
}

/// API tags for construction endpoints
#[derive(Tags)]
enum ConstructionTags {
    /// Construction permit endpoints
    Constructions,
}

#[OpenApi]
impl ConstructionsApi {
    /// Record a construction permit
    #[oai(
        path = "/constructions",
        method = "post",
        tag = "ConstructionTags::Constructions"
    )]
    async fn create(
        &self,
        body: Json<CreateConstructionRequest>,
    ) -> Result<CreatedConstructionResponse, RecordError> {
        let req = body.0;
        if req.account_id.is_empty() {
            return Err(log_rejection(
                "create_construction",
                RecordError::validation("accountId is required"),
            ));
        }
        if req.project.is_empty() {
            return Err(log_rejection(
                "create_construction",
                RecordError::validation("project is required"),
            ));
        }
        if req.block.is_empty() {
            return Err(log_rejection(
                "create_construction",
                RecordError::validation("block is required"),
            ));
        }
        if req.house_id.is_empty() {
            return Err(log_rejection(
                "create_construction",
                RecordError::validation("houseId is required"),
            ));
        }

        let model = construction::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            account_id: Set(req.account_id),
            project: Set(req.project),
            block: Set(req.block),
            house_id: Set(req.house_id),
            start_date: Set(req.start_date.filter(|d| !d.is_empty())),
            end_date: Set(req.end_date.filter(|d| !d.is_empty())),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self.constructions.insert(model).await.map_err(|e| {
            log_rejection("create_construction", RecordError::internal(e.to_string()))
        })?;

        Ok(CreatedConstructionResponse::Created(Json(created.into())))
    }

    /// List every construction permit
    #[oai(
        path = "/constructions",
        method = "get",
        tag = "ConstructionTags::Constructions"
    )]
    async fn list(&self) -> Result<Json<Vec<ConstructionView>>, RecordError> {
        let constructions = self.constructions.list().await.map_err(|e| {
            log_rejection("list_constructions", RecordError::internal(e.to_string()))
        })?;

        Ok(Json(constructions.into_iter().map(Into::into).collect()))
    }

    /// List construction permits in one block
    #[oai(
        path = "/constructions/block/:block",
        method = "get",
        tag = "ConstructionTags::Constructions"
    )]
    async fn list_by_block(
        &self,
        block: Path<String>,
    ) -> Result<Json<Vec<ConstructionView>>, RecordError> {
        let constructions = self
            .constructions
            .list_by_block(&block.0)
            .await
            .map_err(|e| {
                log_rejection(
                    "list_constructions_by_block",
                    RecordError::internal(e.to_string()),
                )
            })?;

        Ok(Json(constructions.into_iter().map(Into::into).collect()))
    }
}
