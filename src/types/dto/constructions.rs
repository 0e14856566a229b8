use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::construction;

/// Request model for recording a construction permit
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateConstructionRequest {
    /// Account the permit belongs to
    pub account_id: String,

    /// What is being built or renovated
    pub project: String,

    /// Block of the construction site
    pub block: String,

    /// House id of the construction site
    pub house_id: String,

    /// Planned start date (free-form)
    pub start_date: Option<String>,

    /// Planned end date (free-form)
    pub end_date: Option<String>,
}

/// Construction permit as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ConstructionView {
    pub id: String,
    pub account_id: String,
    pub project: String,
    pub block: String,
    pub house_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: i64,
}

impl From<construction::Model> for ConstructionView {
    fn from(m: construction::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            project: m.project,
            block: m.block,
            house_id: m.house_id,
            start_date: m.start_date,
            end_date: m.end_date,
            created_at: m.created_at,
        }
    }
}

/// API response for construction permit creation
#[derive(ApiResponse)]
pub enum CreatedConstructionResponse {
    /// Permit recorded
    #[oai(status = 201)]
    Created(Json<ConstructionView>),
}
