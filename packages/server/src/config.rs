use anyhow::{Context, Result};
use cosmos_client::CosmosOptions;
use dotenvy::dotenv;
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Cosmos DB connection settings.
///
/// Every field is optional so the server can boot (and report the gap on
/// `/health`) when the store is not configured yet.
#[derive(Debug, Clone, Default)]
pub struct CosmosSettings {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub database: Option<String>,
    pub container: Option<String>,
}

impl CosmosSettings {
    /// Names of the environment variables that are unset or empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("COSMOS_ENDPOINT", &self.endpoint),
            ("COSMOS_KEY", &self.key),
            ("COSMOS_DATABASE", &self.database),
            ("COSMOS_CONTAINER", &self.container),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Client options, if every setting is present
    pub fn to_options(&self) -> Option<CosmosOptions> {
        Some(CosmosOptions {
            endpoint: self.endpoint.clone()?,
            key: self.key.clone()?,
            database: self.database.clone()?,
            container: self.container.clone()?,
        })
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub cosmos: CosmosSettings,
    pub port: u16,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            cosmos: CosmosSettings {
                endpoint: var("COSMOS_ENDPOINT"),
                key: var("COSMOS_KEY"),
                database: var("COSMOS_DATABASE"),
                container: var("COSMOS_CONTAINER"),
            },
            port,
            allowed_origins,
        })
    }
}
