use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service: "healthy" or "degraded"
    pub status: String,

    /// Database reachability: "ok" or "unreachable"
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Confirmation returned by delete endpoints
#[derive(Object, Debug)]
pub struct DeletedResponse {
    pub message: String,

    /// Identifier of the removed record
    pub id: i32,
}
