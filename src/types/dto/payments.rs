use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::payment;

/// Request model for recording a utility payment
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Paying account id
    pub account_id: String,

    /// Amount paid
    pub amount: f64,

    /// What the payment covers (dues, water, electricity, ...)
    pub purpose: String,

    /// Payment method; defaults to "Cash"
    pub method: Option<String>,

    /// Optional external reference number
    pub reference: Option<String>,
}

/// Payment record as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    pub purpose: String,
    pub method: String,
    pub reference: Option<String>,
    pub created_at: i64,
}

impl From<payment::Model> for PaymentView {
    fn from(m: payment::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            amount: m.amount,
            purpose: m.purpose,
            method: m.method,
            reference: m.reference,
            created_at: m.created_at,
        }
    }
}

/// API response for payment creation
#[derive(ApiResponse)]
pub enum CreatedPaymentResponse {
    /// Payment recorded
    #[oai(status = 201)]
    Created(Json<PaymentView>),
}
