//! Cosmos DB implementation of `BaseDocumentStore`.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use cosmos_client::{CosmosClient, SqlQuery};

use crate::common::SensorWindowRecord;
use crate::config::CosmosSettings;
use crate::kernel::{BaseDocumentStore, StoreError};

const SELECT_BY_LOCATION: &str = "SELECT * FROM c WHERE c.location = @location";

const SELECT_STATUS_BY_LOCATION: &str = "SELECT c.location, c.safetyStatus, c.windowEndTime, \
     c.windowEnd FROM c WHERE c.location = @location";

const SELECT_ALL: &str = "SELECT * FROM c";

// =============================================================================
// CosmosClient Adapter (implements BaseDocumentStore trait)
// =============================================================================

/// Wrapper around CosmosClient that implements BaseDocumentStore trait
pub struct CosmosDocumentStore(pub Arc<CosmosClient>);

impl CosmosDocumentStore {
    pub fn new(client: Arc<CosmosClient>) -> Self {
        Self(client)
    }

    async fn run(&self, query: SqlQuery) -> Result<Vec<SensorWindowRecord>> {
        let records = self
            .0
            .query_documents::<SensorWindowRecord>(&query)
            .await
            .map_err(StoreError::from)?;
        Ok(records)
    }
}

#[async_trait]
impl BaseDocumentStore for CosmosDocumentStore {
    async fn query_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        let records = self
            .run(SqlQuery::new(SELECT_BY_LOCATION).bind("@location", slug))
            .await?;
        tracing::debug!(slug, count = records.len(), "Fetched window records");
        Ok(records)
    }

    async fn query_status_by_location(&self, slug: &str) -> Result<Vec<SensorWindowRecord>> {
        let records = self
            .run(SqlQuery::new(SELECT_STATUS_BY_LOCATION).bind("@location", slug))
            .await?;
        tracing::debug!(slug, count = records.len(), "Fetched status projections");
        Ok(records)
    }

    async fn query_all(&self) -> Result<Vec<SensorWindowRecord>> {
        let records = self.run(SqlQuery::new(SELECT_ALL)).await?;
        tracing::debug!(count = records.len(), "Fetched all window records");
        Ok(records)
    }
}

// =============================================================================
// Unconfigured store
// =============================================================================

/// Stand-in used when store settings are absent.
///
/// Lets the process start so `/health` can report what is missing; every
/// query fails with `StoreError::NotConfigured`.
pub struct UnconfiguredStore {
    missing: Vec<&'static str>,
}

impl UnconfiguredStore {
    pub fn new(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }

    fn fail(&self) -> anyhow::Error {
        StoreError::NotConfigured(self.missing.clone()).into()
    }
}

#[async_trait]
impl BaseDocumentStore for UnconfiguredStore {
    async fn query_by_location(&self, _slug: &str) -> Result<Vec<SensorWindowRecord>> {
        Err(self.fail())
    }

    async fn query_all(&self) -> Result<Vec<SensorWindowRecord>> {
        Err(self.fail())
    }
}

/// Pick the store implementation for the given settings.
///
/// Absent settings yield an `UnconfiguredStore`; settings that are present but
/// unusable (bad endpoint, undecodable key) are a startup error.
pub fn build_document_store(settings: &CosmosSettings) -> Result<Arc<dyn BaseDocumentStore>> {
    let Some(options) = settings.to_options() else {
        let missing = settings.missing();
        tracing::warn!(
            missing = ?missing,
            "Cosmos DB settings incomplete; API routes will fail until configured"
        );
        return Ok(Arc::new(UnconfiguredStore::new(missing)));
    };

    let client = CosmosClient::new(options).context("Invalid Cosmos DB configuration")?;
    tracing::info!(
        database = %client.database(),
        container = %client.container(),
        "Cosmos DB client ready"
    );

    Ok(Arc::new(CosmosDocumentStore::new(Arc::new(client))))
}
