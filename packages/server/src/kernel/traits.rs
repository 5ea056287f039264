// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no view logic.
// Views are domain functions that take ServerDeps and call these traits.
//
// Naming convention: Base* for trait names (e.g., BaseDocumentStore)

use anyhow::Result;
use async_trait::async_trait;
use cosmos_client::CosmosError;
use thiserror::Error;

use crate::common::SensorWindowRecord;

// =============================================================================
// Store errors
// =============================================================================

/// Failures raised by document store implementations.
///
/// Carried inside `anyhow::Error` so callers can add context and still
/// downcast at the route boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store unreachable or query rejected
    #[error("document store unavailable: {0}")]
    Unavailable(#[from] CosmosError),

    #[error("document store not configured (missing {})", .0.join(", "))]
    NotConfigured(Vec<&'static str>),
}

// =============================================================================
// Document Store Trait (Infrastructure - read-only queries)
// =============================================================================

#[async_trait]
pub trait BaseDocumentStore: Send + Sync {
    /// Every window record whose `location` equals `slug`, unpaginated
    async fn query_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>>;

    /// Same filter as `query_by_location`, but implementations may return only
    /// `location`, `safetyStatus` and the window-end fields
    async fn query_status_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        self.query_by_location(slug).await
    }

    /// Every record in the store, unfiltered
    async fn query_all(&self) -> Result<Vec<SensorWindowRecord>>;
}
