use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::service_request;

/// Request model for filing a service request
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequestRequest {
    /// Requesting account id
    pub account_id: String,

    /// Kind of service requested (maintenance, garbage, ...)
    pub request_type: String,

    /// Free-form details
    pub details: String,
}

/// Service request as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestView {
    pub id: String,
    pub account_id: String,
    pub request_type: String,
    pub details: String,
    pub status: String,
    pub created_at: i64,
}

impl From<service_request::Model> for ServiceRequestView {
    fn from(m: service_request::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            request_type: m.request_type,
            details: m.details,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

/// API response for service request creation
#[derive(ApiResponse)]
pub enum CreatedServiceRequestResponse {
    /// Service request filed
    #[oai(status = 201)]
    Created(Json<ServiceRequestView>),
}
