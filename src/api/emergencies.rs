use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::stores::EmergencyStore;
use crate::types::db::emergency;
use crate::types::dto::emergencies::{
    CreateEmergencyRequest, CreatedEmergencyResponse, EmergencyView,
};

/// Emergency log API endpoints
pub struct EmergenciesApi {
    emergencies: Arc<EmergencyStore>,
}

impl EmergenciesApi {
    pub fn new(emergencies: Arc<EmergencyStore>) -> Self {
        Self { emergencies }
    }
}

/// API tags for emergency endpoints
#[derive(Tags)]
enum EmergencyTags {
    /// Emergency log endpoints
    Emergencies,
}

#[OpenApi]
impl EmergenciesApi {
    /// Log an emergency
    ///
    /// New emergencies always start in the "Reported" status.
    #[oai(
        path = "/emergencies",
        method = "post",
        tag = "EmergencyTags::Emergencies"
    )]
    async fn create(
        &self,
        body: Json<CreateEmergencyRequest>,
    ) -> Result<CreatedEmergencyResponse, RecordError> {
        let req = body.0;
        if req.account_id.is_empty() {
            return Err(log_rejection(
                "create_emergency",
                RecordError::validation("accountId is required"),
            ));
        }
        if req.emergency_type.is_empty() {
            return Err(log_rejection(
                "create_emergency",
                RecordError::validation("emergencyType is required"),
            ));
        }
        if req.description.is_empty() {
            return Err(log_rejection(
                "create_emergency",
                RecordError::validation("description is required"),
            ));
        }

        let model = emergency::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            account_id: Set(req.account_id),
            emergency_type: Set(req.emergency_type),
            description: Set(req.description),
            location: Set(req.location.filter(|l| !l.is_empty())),
            status: Set("Reported".to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self
            .emergencies
            .insert(model)
            .await
            .map_err(|e| log_rejection("create_emergency", RecordError::internal(e.to_string())))?;

        Ok(CreatedEmergencyResponse::Created(Json(created.into())))
    }

    /// List every emergency
    #[oai(
        path = "/emergencies",
        method = "get",
        tag = "EmergencyTags::Emergencies"
    )]
    async fn list(&self) -> Result<Json<Vec<EmergencyView>>, RecordError> {
        let emergencies = self
            .emergencies
            .list()
            .await
            .map_err(|e| log_rejection("list_emergencies", RecordError::internal(e.to_string())))?;

        Ok(Json(emergencies.into_iter().map(Into::into).collect()))
    }

    /// List emergencies reported by one account
    #[oai(
        path = "/emergencies/account/:account_id",
        method = "get",
        tag = "EmergencyTags::Emergencies"
    )]
    async fn list_by_account(
        &self,
        account_id: Path<String>,
    ) -> Result<Json<Vec<EmergencyView>>, RecordError> {
        let emergencies = self
            .emergencies
            .list_by_account(&account_id.0)
            .await
            .map_err(|e| {
                log_rejection(
                    "list_emergencies_by_account",
                    RecordError::internal(e.to_string()),
                )
            })?;

        Ok(Json(emergencies.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_api() -> EmergenciesApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        EmergenciesApi::new(Arc::new(EmergencyStore::new(db)))
    }

    fn emergency_request(account_id: &str) -> CreateEmergencyRequest {
        CreateEmergencyRequest {
            account_id: account_id.to_string(),
            emergency_type: "fire".to_string(),
            description: "Smoke coming from the kitchen".to_string(),
            location: Some("Block A House 12".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_starts_in_reported_status() {
        let api = setup_api().await;

        let CreatedEmergencyResponse::Created(json) =
            api.create(Json(emergency_request("acct-1"))).await.unwrap();

        assert_eq!(json.0.status, "Reported");
        assert_eq!(json.0.emergency_type, "fire");
    }

    #[tokio::test]
    async fn test_create_without_type_is_rejected() {
        let api = setup_api().await;

        let mut request = emergency_request("acct-1");
        request.emergency_type = String::new();
        let result = api.create(Json(request)).await;

        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_by_account_filters() {
        let api = setup_api().await;
        api.create(Json(emergency_request("acct-1"))).await.unwrap();
        api.create(Json(emergency_request("acct-2"))).await.unwrap();

        let result = api
            .list_by_account(Path("acct-1".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.0[0].account_id, "acct-1");
    }
}
