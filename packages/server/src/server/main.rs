// Main entry point for the Skateway Conditions API server

use anyhow::{Context, Result};
use skateway_core::{kernel::build_document_store, kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log whether a variable is set, showing only its first few characters
fn mask_env(name: &str) {
    match std::env::var(name) {
        Ok(val) if val.is_empty() => tracing::info!("  {}: (empty)", name),
        Ok(val) => {
            let show = val
                .char_indices()
                .nth(4)
                .map(|(idx, _)| idx)
                .unwrap_or(val.len());
            let hidden = val[show..].chars().count();
            tracing::info!(
                "  {}: {}{}  ({} chars)",
                name,
                &val[..show],
                "*".repeat(hidden),
                val.chars().count()
            );
        }
        Err(_) => tracing::warn!("  {}: NOT SET", name),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skateway_core=debug,cosmos_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Skateway Conditions API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Environment variables:");
    for name in &[
        "COSMOS_ENDPOINT",
        "COSMOS_KEY",
        "COSMOS_DATABASE",
        "COSMOS_CONTAINER",
        "PORT",
        "CORS_ALLOWED_ORIGINS",
    ] {
        mask_env(name);
    }

    // Document store (degrades to an unconfigured store when settings are absent)
    let store = build_document_store(&config.cosmos)?;
    let deps = ServerDeps::new(store);

    // Build application
    let app = build_app(deps, config.cosmos.clone(), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Dashboard: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
