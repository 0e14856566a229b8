use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::notification;

/// Request model for posting a single notification
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    /// Short title
    pub title: String,

    /// Notification body
    pub message: String,

    /// Target audience label; defaults to "All"
    pub audience: Option<String>,
}

/// Request model for broadcasting to every occupied block
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// Short title
    pub title: String,

    /// Notification body
    pub message: String,
}

/// Notification record as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: String,
    pub title: String,
    pub message: String,
    pub audience: String,
    pub created_at: i64,
}

impl From<notification::Model> for NotificationView {
    fn from(m: notification::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            message: m.message,
            audience: m.audience,
            created_at: m.created_at,
        }
    }
}

/// Response model for a broadcast
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BroadcastResponse {
    /// Number of notifications created (one per distinct block)
    pub created: usize,

    /// The created notifications
    pub notifications: Vec<NotificationView>,
}

/// API response for notification creation
#[derive(ApiResponse)]
pub enum CreatedNotificationResponse {
    /// Notification posted
    #[oai(status = 201)]
    Created(Json<NotificationView>),
}

/// API response for a broadcast
#[derive(ApiResponse)]
pub enum BroadcastApiResponse {
    /// One notification created per distinct block
    #[oai(status = 201)]
    Created(Json<BroadcastResponse>),
}
