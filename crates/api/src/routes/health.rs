//! Health check handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extract::Json;

/// Health summary payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Health summary, served at the API root.
///
/// There are no dependencies to probe; if the process answers, it is
/// healthy.
pub async fn index() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

/// Liveness probe endpoint.
pub async fn liveness() -> &'static str {
    "ok"
}
