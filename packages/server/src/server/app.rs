//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CosmosSettings;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    all_handler, health_handler, history_handler, latest_handler, status_handler,
};
use crate::server::static_files::serve_dashboard;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    /// Store settings as loaded, reported (never queried) by `/health`
    pub cosmos: Arc<CosmosSettings>,
}

/// CORS for the dashboard and third-party readers: GET only.
///
/// An empty allow-list means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, cosmos: CosmosSettings, allowed_origins: &[String]) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
        cosmos: Arc::new(cosmos),
    };

    Router::new()
        // Dashboard
        .route("/", get(serve_dashboard))
        // Health check (config presence only, no store round-trip)
        .route("/health", get(health_handler))
        // Read views
        .route("/api/latest", get(latest_handler))
        .route("/api/history/:location", get(history_handler))
        .route("/api/status", get(status_handler))
        .route("/api/all", get(all_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
