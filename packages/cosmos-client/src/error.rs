//! Error types for the Cosmos DB client.

use thiserror::Error;

/// Result type for Cosmos DB client operations.
pub type Result<T> = std::result::Result<T, CosmosError>;

/// Cosmos DB client errors.
#[derive(Debug, Error)]
pub enum CosmosError {
    /// Configuration error (bad endpoint, empty database or container id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The master key could not be used to sign a request
    #[error("Signature error: {0}")]
    Signature(String),

    /// Network error (connection refused, TLS failure, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the account endpoint
    #[error("Cosmos DB API error ({status}): {message}")]
    Api { status: u16, message: String },
}
