use poem_openapi::{payload::Json, OpenApi, Tags};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::app_data::AppData;
use crate::types::dto::common::HealthResponse;
use chrono::Utc;

/// Health check API
pub struct HealthApi {
    db: DatabaseConnection,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
        }
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
    /// Reports "degraded" when the database does not answer a ping
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database = match self.db.ping().await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                "unreachable"
            }
        };

        Json(HealthResponse {
            status: if database == "ok" { "healthy" } else { "degraded" }.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
