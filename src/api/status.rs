//! Service status endpoint.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Status payload reported by the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// GET /api/status - Liveness and version.
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
