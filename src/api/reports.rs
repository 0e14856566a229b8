use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::stores::ReportStore;
use crate::types::db::report;
use crate::types::dto::reports::{CreateReportRequest, CreatedReportResponse, ReportView};

/// Incident report API endpoints
pub struct ReportsApi {
    reports: Arc<ReportStore>,
}

impl ReportsApi {
    pub fn new(reports: Arc<ReportStore>) -> Self {
        Self { reports }
    }
}

/// API tags for report endpoints
#[derive(Tags)]
enum ReportTags {
    /// Incident report endpoints
    Reports,
}

#[OpenApi]
impl ReportsApi {
    /// File an incident report
    ///
    /// New reports always open in the "Open" status.
    #[oai(path = "/reports", method = "post", tag = "ReportTags::Reports")]
    async fn create(
        &self,
        body: Json<CreateReportRequest>,
    ) -> Result<CreatedReportResponse, RecordError> {
        let req = body.0;
        if req.account_id.is_empty() {
            return Err(log_rejection(
                "create_report",
                RecordError::validation("accountId is required"),
            ));
        }
        if req.category.is_empty() {
            return Err(log_rejection(
                "create_report",
                RecordError::validation("category is required"),
            ));
        }
        if req.description.is_empty() {
            return Err(log_rejection(
                "create_report",
                RecordError::validation("description is required"),
            ));
        }

        let model = report::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            account_id: Set(req.account_id),
            category: Set(req.category),
            description: Set(req.description),
            block: Set(req.block.filter(|b| !b.is_empty())),
            house_id: Set(req.house_id.filter(|h| !h.is_empty())),
            status: Set("Open".to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self
            .reports
            .insert(model)
            .await
            .map_err(|e| log_rejection("create_report", RecordError::internal(e.to_string())))?;

        Ok(CreatedReportResponse::Created(Json(created.into())))
    }

    /// List every report
    #[oai(path = "/reports", method = "get", tag = "ReportTags::Reports")]
    async fn list(&self) -> Result<Json<Vec<ReportView>>, RecordError> {
        let reports = self
            .reports
            .list()
            .await
            .map_err(|e| log_rejection("list_reports", RecordError::internal(e.to_string())))?;

        Ok(Json(reports.into_iter().map(Into::into).collect()))
    }

    /// List reports filed by one account
    #[oai(
        path = "/reports/account/:account_id",
        method = "get",
        tag = "ReportTags::Reports"
    )]
    async fn list_by_account(
        &self,
        account_id: Path<String>,
    ) -> Result<Json<Vec<ReportView>>, RecordError> {
        let reports = self.reports.list_by_account(&account_id.0).await.map_err(|e| {
            log_rejection("list_reports_by_account", RecordError::internal(e.to_string()))
        })?;

        Ok(Json(reports.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_api() -> ReportsApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        ReportsApi::new(Arc::new(ReportStore::new(db)))
    }

    fn report_request(account_id: &str) -> CreateReportRequest {
        CreateReportRequest {
            account_id: account_id.to_string(),
            category: "noise".to_string(),
            description: "Loud karaoke past midnight".to_string(),
            block: Some("A".to_string()),
            house_id: Some("12".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_opens_report_in_open_status() {
        let api = setup_api().await;

        let CreatedReportResponse::Created(json) =
            api.create(Json(report_request("acct-1"))).await.unwrap();

        assert_eq!(json.0.status, "Open");
        assert_eq!(json.0.category, "noise");
    }

    #[tokio::test]
    async fn test_create_without_description_is_rejected() {
        let api = setup_api().await;

        let mut request = report_request("acct-1");
        request.description = String::new();
        let result = api.create(Json(request)).await;

        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_by_account_filters() {
        let api = setup_api().await;
        api.create(Json(report_request("acct-1"))).await.unwrap();
        api.create(Json(report_request("acct-2"))).await.unwrap();

        let result = api
            .list_by_account(Path("acct-2".to_string()))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.0[0].account_id, "acct-2");
    }
}
