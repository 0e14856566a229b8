use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};
use sea_orm::DatabaseConnection;

use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    db: DatabaseConnection,
}

impl HealthApi {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Answers "healthy" only while the database responds to a ping;
    /// a dead connection turns the report into "degraded".
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database_reachable = self.db.ping().await.is_ok();

        Json(HealthResponse {
            status: if database_reachable {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            database: if database_reachable {
                "reachable".to_string()
            } else {
                "unreachable".to_string()
            },
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
