// TestDependencies - in-memory implementations for testing
//
// Provides store doubles that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use cosmos_client::CosmosError;
use std::sync::{Arc, Mutex};

use super::{BaseDocumentStore, ServerDeps, StoreError};
use crate::common::SensorWindowRecord;

// =============================================================================
// In-memory Document Store
// =============================================================================

/// A store query captured by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ByLocation(String),
    StatusByLocation(String),
    All,
}

pub struct InMemoryDocumentStore {
    records: Arc<Mutex<Vec<SensorWindowRecord>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_records(self, records: Vec<SensorWindowRecord>) -> Self {
        self.records.lock().unwrap().extend(records);
        self
    }

    /// Add records after construction (e.g. once a test harness is built)
    pub fn insert(&self, records: impl IntoIterator<Item = SensorWindowRecord>) {
        self.records.lock().unwrap().extend(records);
    }

    /// Get all queries issued against the store
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self))
    }

    fn matching(&self, slug: &str) -> Vec<SensorWindowRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.location_str() == Some(slug))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDocumentStore for InMemoryDocumentStore {
    async fn query_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::ByLocation(slug.to_string()));
        Ok(self.matching(slug))
    }

    async fn query_status_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::StatusByLocation(slug.to_string()));

        // Mirror the projection the Cosmos store sends
        Ok(self
            .matching(slug)
            .into_iter()
            .map(|r| SensorWindowRecord {
                location: r.location,
                window_end_time: r.window_end_time,
                window_end: r.window_end,
                safety_status: r.safety_status,
                ..Default::default()
            })
            .collect())
    }

    async fn query_all(&self) -> Result<Vec<SensorWindowRecord>> {
        self.calls.lock().unwrap().push(StoreCall::All);
        Ok(self.records.lock().unwrap().clone())
    }
}

// =============================================================================
// Failing Document Store
// =============================================================================

/// Store that fails queries, either all of them or only for selected slugs.
///
/// Queries for slugs that are not configured to fail are answered from an
/// inner in-memory store.
pub struct FailingDocumentStore {
    failing_slugs: Option<Vec<String>>,
    fallback: InMemoryDocumentStore,
}

impl FailingDocumentStore {
    /// Every query fails
    pub fn always() -> Self {
        Self {
            failing_slugs: None,
            fallback: InMemoryDocumentStore::new(),
        }
    }

    /// Only queries for `slug` fail; `query_all` succeeds
    pub fn for_slug(slug: &str, fallback: InMemoryDocumentStore) -> Self {
        Self {
            failing_slugs: Some(vec![slug.to_string()]),
            fallback,
        }
    }

    fn should_fail(&self, slug: Option<&str>) -> bool {
        match (&self.failing_slugs, slug) {
            (None, _) => true,
            (Some(slugs), Some(slug)) => slugs.iter().any(|s| s == slug),
            (Some(_), None) => false,
        }
    }

    fn error() -> anyhow::Error {
        StoreError::Unavailable(CosmosError::Api {
            status: 503,
            message: "ServiceUnavailable".to_string(),
        })
        .into()
    }
}

#[async_trait]
impl BaseDocumentStore for FailingDocumentStore {
    async fn query_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        if self.should_fail(Some(slug)) {
            return Err(Self::error());
        }
        self.fallback.query_by_location(slug).await
    }

    async fn query_status_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        if self.should_fail(Some(slug)) {
            return Err(Self::error());
        }
        self.fallback.query_status_by_location(slug).await
    }

    async fn query_all(&self) -> Result<Vec<SensorWindowRecord>> {
        if self.should_fail(None) {
            return Err(Self::error());
        }
        self.fallback.query_all().await
    }
}
