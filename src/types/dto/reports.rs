use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::report;

/// Request model for filing an incident report
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    /// Reporting account id
    pub account_id: String,

    /// Incident category
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Block where the incident happened
    pub block: Option<String>,

    /// House id where the incident happened
    pub house_id: Option<String>,
}

/// Incident report as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub id: String,
    pub account_id: String,
    pub category: String,
    pub description: String,
    pub block: Option<String>,
    pub house_id: Option<String>,
    pub status: String,
    pub created_at: i64,
}

impl From<report::Model> for ReportView {
    fn from(m: report::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            category: m.category,
            description: m.description,
            block: m.block,
            house_id: m.house_id,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

/// API response for report creation
#[derive(ApiResponse)]
pub enum CreatedReportResponse {
    /// Report filed
    #[oai(status = 201)]
    Created(Json<ReportView>),
}
