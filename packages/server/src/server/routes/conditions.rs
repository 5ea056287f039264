//! Read-view endpoints.
//!
//! GET /api/latest
//! GET /api/history/:location?limit=N
//! GET /api/status
//! GET /api/all
//!
//! Every response carries a `success` flag. Failures are logged here with the
//! full error chain; clients only ever see a fixed message and a 500.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::common::{now_rfc3339, SensorWindowRecord};
use crate::domains::conditions::activities::{
    all_records, history_for_location, latest_conditions, parse_history_limit, status_summary,
};
use crate::domains::conditions::models::{
    HistoryEntry, LatestEntry, LocationStatus, OverallStatus,
};
use crate::kernel::StoreError;
use crate::server::app::AppState;

// =============================================================================
// Failure envelope
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
}

/// Route-boundary failure: fixed client message, detailed server-side log.
pub struct ApiFailure {
    message: &'static str,
    error: anyhow::Error,
}

impl ApiFailure {
    pub fn new(message: &'static str, error: anyhow::Error) -> Self {
        Self { message, error }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let unconfigured = matches!(
            self.error.downcast_ref::<StoreError>(),
            Some(StoreError::NotConfigured(_))
        );
        tracing::error!(error = ?self.error, unconfigured, "{}", self.message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

// =============================================================================
// GET /api/latest
// =============================================================================

#[derive(Debug, Serialize)]
pub struct LatestResponse {
    pub success: bool,
    pub timestamp: String,
    pub data: Vec<LatestEntry>,
}

pub async fn latest_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<LatestResponse>, ApiFailure> {
    let data = latest_conditions(&state.deps)
        .await
        .map_err(|e| ApiFailure::new("Failed to fetch latest data", e))?;

    Ok(Json(LatestResponse {
        success: true,
        timestamp: now_rfc3339(),
        data,
    }))
}

// =============================================================================
// GET /api/history/:location
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub location: String,
    pub data: Vec<HistoryEntry>,
}

pub async fn history_handler(
    Extension(state): Extension<AppState>,
    Path(location): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<HistoryResponse>, ApiFailure> {
    // Raw pairs so repeated or malformed `limit` values fall back to the
    // default instead of rejecting the request; the first occurrence wins
    let limit = parse_history_limit(
        params
            .iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value.as_str()),
    );

    let data = history_for_location(&location, limit, &state.deps)
        .await
        .map_err(|e| ApiFailure::new("Failed to fetch historical data", e))?;

    Ok(Json(HistoryResponse {
        success: true,
        location,
        data,
    }))
}

// =============================================================================
// GET /api/status
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    pub overall_status: OverallStatus,
    pub locations: Vec<LocationStatus>,
}

pub async fn status_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<StatusResponse>, ApiFailure> {
    let summary = status_summary(&state.deps)
        .await
        .map_err(|e| ApiFailure::new("Failed to fetch status", e))?;

    Ok(Json(StatusResponse {
        success: true,
        overall_status: summary.overall_status,
        locations: summary.locations,
    }))
}

// =============================================================================
// GET /api/all
// =============================================================================

#[derive(Debug, Serialize)]
pub struct AllResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SensorWindowRecord>,
}

pub async fn all_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AllResponse>, ApiFailure> {
    let all = all_records(&state.deps)
        .await
        .map_err(|e| ApiFailure::new("Failed to fetch data", e))?;

    Ok(Json(AllResponse {
        success: true,
        count: all.count,
        data: all.data,
    }))
}
