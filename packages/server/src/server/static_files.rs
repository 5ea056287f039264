use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the dashboard page at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct DashboardAssets;

/// Serve the dashboard page
pub async fn serve_dashboard() -> Response {
    serve_embedded::<DashboardAssets>("index.html")
}

/// Serve one embedded file with a content type guessed from its name
fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
