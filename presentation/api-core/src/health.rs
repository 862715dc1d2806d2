use chrono::Utc;
use poem::endpoint::make_sync;
use poem::web::Json;
use poem::{Endpoint, get};
use serde::{Deserialize, Serialize};

use crate::manifest::ServiceManifest;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// `GET /health` for liveness checks. Mounted outside tenant scope and the auth gate.
pub fn health_endpoint(manifest: &ServiceManifest) -> impl Endpoint + 'static {
    let version = manifest.version;
    get(make_sync(move |_| {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: version.to_string(),
        })
    }))
}
