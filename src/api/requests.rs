use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::stores::RequestStore;
use crate::types::db::service_request;
use crate::types::dto::requests::{
    CreateServiceRequestRequest, CreatedServiceRequestResponse, ServiceRequestView,
};

/// Service request API endpoints
pub struct RequestsApi {
    requests: Arc<RequestStore>,
}

impl RequestsApi {
    pub fn new(requests: Arc<RequestStore>) -> Self {
        Self { requests }
    }
}

/// API tags for service request endpoints
#[derive(Tags)]
enum RequestTags {
    /// Service request endpoints
    Requests,
}

#[OpenApi]
impl RequestsApi {
    /// File a service request
    ///
    /// New requests always start in the "Pending" status.
    #[oai(path = "/requests", method = "post", tag = "RequestTags::Requests")]
    async fn create(
        &self,
        body: Json<CreateServiceRequestRequest>,
    ) -> Result<CreatedServiceRequestResponse, RecordError> {
        let req = body.0;
        if req.account_id.is_empty() {
            return Err(log_rejection(
                "create_request",
                RecordError::validation("accountId is required"),
            ));
        }
        if req.request_type.is_empty() {
            return Err(log_rejection(
                "create_request",
                RecordError::validation("requestType is required"),
            ));
        }
        if req.details.is_empty() {
            return Err(log_rejection(
                "create_request",
                RecordError::validation("details is required"),
            ));
        }

        let model = service_request::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            account_id: Set(req.account_id),
            request_type: Set(req.request_type),
            details: Set(req.details),
            status: Set("Pending".to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self
            .requests
            .insert(model)
            .await
            .map_err(|e| log_rejection("create_request", RecordError::internal(e.to_string())))?;

        Ok(CreatedServiceRequestResponse::Created(Json(created.into())))
    }

    /// List every service request
    #[oai(path = "/requests", method = "get", tag = "RequestTags::Requests")]
    async fn list(&self) -> Result<Json<Vec<ServiceRequestView>>, RecordError> {
        let requests = self
            .requests
            .list()
            .await
            .map_err(|e| log_rejection("list_requests", RecordError::internal(e.to_string())))?;

        Ok(Json(requests.into_iter().map(Into::into).collect()))
    }

    /// List service requests filed by one account
    #[oai(
        path = "/requests/account/:account_id",
        method = "get",
        tag = "RequestTags::Requests"
    )]
    async fn list_by_account(
        &self,
        account_id: Path<String>,
    ) -> Result<Json<Vec<ServiceRequestView>>, RecordError> {
        let requests = self
            .requests
            .list_by_account(&account_id.0)
            .await
            .map_err(|e| {
                log_rejection(
                    "list_requests_by_account",
                    RecordError::internal(e.to_string()),
                )
            })?;

        Ok(Json(requests.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_api() -> RequestsApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        RequestsApi::new(Arc::new(RequestStore::new(db)))
    }

    fn service_request(account_id: &str) -> CreateServiceRequestRequest {
        CreateServiceRequestRequest {
            account_id: account_id.to_string(),
            request_type: "maintenance".to_string(),
            details: "Streetlight near the gate is busted".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_starts_in_pending_status() {
        let api = setup_api().await;

        let CreatedServiceRequestResponse::Created(json) =
            api.create(Json(service_request("acct-1"))).await.unwrap();

        assert_eq!(json.0.status, "Pending");
        assert_eq!(json.0.request_type, "maintenance");
    }

    #[tokio::test]
    async fn test_create_without_details_is_rejected() {
        let api = setup_api().await;

        let mut request = service_request("acct-1");
        request.details = String::new();
        let result = api.create(Json(request)).await;

        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_by_account_filters() {
        let api = setup_api().await;
        api.create(Json(service_request("acct-1"))).await.unwrap();
        api.create(Json(service_request("acct-2"))).await.unwrap();

        let result = api
            .list_by_account(Path("acct-2".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.0[0].account_id, "acct-2");
    }
}
