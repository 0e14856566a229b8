use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::emergency;

/// Request model for logging an emergency
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateEmergencyRequest {
    /// Reporting account id
    pub account_id: String,

    /// Kind of emergency (fire, medical, security, ...)
    pub emergency_type: String,

    /// Free-form description
    pub description: String,

    /// Where the emergency is happening
    pub location: Option<String>,
}

/// Emergency record as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct EmergencyView {
    pub id: String,
    pub account_id: String,
    pub emergency_type: String,
    pub description: String,
    pub location: Option<String>,
    pub status: String,
    pub created_at: i64,
}

impl From<emergency::Model> for EmergencyView {
    fn from(m: emergency::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            emergency_type: m.emergency_type,
            description: m.description,
            location: m.location,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

/// API response for emergency creation
#[derive(ApiResponse)]
pub enum CreatedEmergencyResponse {
    /// Emergency logged
    #[oai(status = 201)]
    Created(Json<EmergencyView>),
}
