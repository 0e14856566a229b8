use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use sea_orm::Set;
use uuid::Uuid;

use crate::api::log_rejection;
use crate::errors::RecordError;
use crate::services::NotificationService;
use crate::stores::NotificationStore;
use crate::types::db::notification;
use crate::types::dto::notifications::{
    BroadcastApiResponse, BroadcastRequest, BroadcastResponse, CreateNotificationRequest,
    CreatedNotificationResponse, NotificationView,
};

/// Notification API endpoints
pub struct NotificationsApi {
    notifications: Arc<NotificationStore>,
    broadcaster: Arc<NotificationService>,
}

impl NotificationsApi {
    pub fn new(
        notifications: Arc<NotificationStore>,
        broadcaster: Arc<NotificationService>,
    ) -> Self {
        Self {
            notifications,
            broadcaster,
        }
    }
}

/// API tags for notification endpoints
#[derive(Tags)]
enum NotificationTags {
    /// Notification endpoints
    Notifications,
}

#[OpenApi]
impl NotificationsApi {
    /// Post a single notification
    ///
    /// Audience defaults to "All" when omitted.
    #[oai(
        path = "/notifications",
        method = "post",
        tag = "NotificationTags::Notifications"
    )]
    async fn create(
        &self,
        body: Json<CreateNotificationRequest>,
    ) -> Result<CreatedNotificationResponse, RecordError> {
        let req = body.0;
        if req.title.is_empty() {
            return Err(log_rejection(
                "create_notification",
                RecordError::validation("title is required"),
            ));
        }
        if req.message.is_empty() {
            return Err(log_rejection(
                "create_notification",
                RecordError::validation("message is required"),
            ));
        }

        let model = notification::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(req.title),
            message: Set(req.message),
            audience: Set(req
                .audience
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "All".to_string())),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = self.notifications.insert(model).await.map_err(|e| {
            log_rejection("create_notification", RecordError::internal(e.to_string()))
        })?;

        Ok(CreatedNotificationResponse::Created(Json(created.into())))
    }

    /// Broadcast a notification to every occupied block
    ///
    /// Creates one notification per distinct resident block, each addressed
    /// to its "Block {x}" audience.
    #[oai(
        path = "/notifications/broadcast",
        method = "post",
        tag = "NotificationTags::Notifications"
    )]
    async fn broadcast(
        &self,
        body: Json<BroadcastRequest>,
    ) -> Result<BroadcastApiResponse, RecordError> {
        let req = body.0;
        if req.title.is_empty() {
            return Err(log_rejection(
                "broadcast_notification",
                RecordError::validation("title is required"),
            ));
        }
        if req.message.is_empty() {
            return Err(log_rejection(
                "broadcast_notification",
                RecordError::validation("message is required"),
            ));
        }

        let created = self
            .broadcaster
            .broadcast(&req.title, &req.message)
            .await
            .map_err(|e| {
                log_rejection("broadcast_notification", RecordError::internal(e.to_string()))
            })?;

        Ok(BroadcastApiResponse::Created(Json(BroadcastResponse {
            created: created.len(),
            notifications: created.into_iter().map(Into::into).collect(),
        })))
    }

    /// List every notification
    #[oai(
        path = "/notifications",
        method = "get",
        tag = "NotificationTags::Notifications"
    )]
    async fn list(&self) -> Result<Json<Vec<NotificationView>>, RecordError> {
        let notifications = self.notifications.list().await.map_err(|e| {
            log_rejection("list_notifications", RecordError::internal(e.to_string()))
        })?;

        Ok(Json(notifications.into_iter().map(Into::into).collect()))
    }

    /// List notifications addressed to one audience label
    #[oai(
        path = "/notifications/audience/:audience",
        method = "get",
        tag = "NotificationTags::Notifications"
    )]
    async fn list_by_audience(
        &self,
        audience: Path<String>,
    ) -> Result<Json<Vec<NotificationView>>, RecordError> {
        let notifications = self
            .notifications
            .list_by_audience(&audience.0)
            .await
            .map_err(|e| {
                log_rejection(
                    "list_notifications_by_audience",
                    RecordError::internal(e.to_string()),
                )
            })?;

        Ok(Json(notifications.into_iter().map(Into::into).collect()))
    }
}
