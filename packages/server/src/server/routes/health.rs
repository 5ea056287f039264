use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::common::now_rfc3339;
use crate::config::CosmosSettings;
use crate::server::app::AppState;

const MISSING: &str = "missing";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    cosmosdb: CosmosHealth,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CosmosHealth {
    endpoint: String,
    database: String,
    container: String,
}

impl CosmosHealth {
    /// The endpoint is only reported as present; database and container ids
    /// are echoed back.
    pub fn from_settings(settings: &CosmosSettings) -> Self {
        Self {
            endpoint: if settings.endpoint.is_some() {
                "configured".to_string()
            } else {
                MISSING.to_string()
            },
            database: settings
                .database
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            container: settings
                .container
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

/// Health check endpoint
///
/// Reports process liveness and whether store settings are present. Does not
/// contact the store, so it stays 200 while Cosmos DB is down.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_rfc3339(),
        cosmosdb: CosmosHealth::from_settings(&state.cosmos),
    })
}
