use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::stores::PaymentStore;
use crate::types::db::payment;
use crate::types::dto::payments::{CreatePaymentRequest, CreatedPaymentResponse, PaymentView};

/// Utility payment API endpoints
pub struct PaymentsApi {
    payments: Arc<PaymentStore>,
}

impl PaymentsApi {
    pub fn new(payments: Arc<PaymentStore>) -> Self {
        Self { payments }
    }
}

/// API tags for payment endpoints
#[derive(Tags)]
enum PaymentTags {
    /// Utility payment endpoints
    Payments,
}

#[OpenApi]
impl PaymentsApi {
    /// Record a utility payment
    ///
    /// Method defaults to "Cash" when omitted.
    #[oai(path = "/payments", method = "post", tag = "PaymentTags::Payments")]
    async fn create(
        &self,
        body: Json<CreatePaymentRequest>,
    ) -> Result<CreatedPaymentResponse, RecordError> {
        let req = body.0;
        if req.account_id.is_empty() {
            return Err(log_rejection(
                "create_payment",
                RecordError::validation("accountId is required"),
            ));
        }
        if req.purpose.is_empty() {
            return Err(log_rejection(
                "create_payment",
                RecordError::validation("purpose is required"),
            ));
        }

        let model = payment::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            account_id: Set(req.account_id),
            amount: Set(req.amount),
            purpose: Set(req.purpose),
            method: Set(req
                .method
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Cash".to_string())),
            reference: Set(req.reference.filter(|r| !r.is_empty())),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self
            .payments
            .insert(model)
            .await
            .map_err(|e| log_rejection("create_payment", RecordError::internal(e.to_string())))?;

        Ok(CreatedPaymentResponse::Created(Json(created.into())))
    }

    /// List every payment
    #[oai(path = "/payments", method = "get", tag = "PaymentTags::Payments")]
    async fn list(&self) -> Result<Json<Vec<PaymentView>>, RecordError> {
        let payments = self
            .payments
            .list()
            .await
            .map_err(|e| log_rejection("list_payments", RecordError::internal(e.to_string())))?;

        Ok(Json(payments.into_iter().map(Into::into).collect()))
    }

    /// List payments made by one account
    #[oai(
        path = "/payments/account/:account_id",
        method = "get",
        tag = "PaymentTags::Payments"
    )]
    async fn list_by_account(
        &self,
        account_id: Path<String>,
    ) -> Result<Json<Vec<PaymentView>>, RecordError> {
        let payments = self
            .payments
            .list_by_account(&account_id.0)
            .await
            .map_err(|e| {
                log_rejection("list_payments_by_account", RecordError::internal(e.to_string()))
            })?;

        Ok(Json(payments.into_iter().map(Into::into).collect()))
    }
}
