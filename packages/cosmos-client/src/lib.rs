//! Pure Azure Cosmos DB (SQL API) REST client.
//!
//! A minimal read-side client for a single container. Supports parameterized
//! SQL queries with cross-partition fan-out and continuation-token paging.
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_client::{CosmosClient, CosmosOptions, SqlQuery};
//!
//! let client = CosmosClient::new(CosmosOptions {
//!     endpoint: "https://account.documents.azure.com:443/".into(),
//!     key: "base64-master-key".into(),
//!     database: "telemetry".into(),
//!     container: "readings".into(),
//! })?;
//!
//! let query = SqlQuery::new("SELECT * FROM c WHERE c.location = @location")
//!     .bind("@location", "nac");
//! let docs: Vec<serde_json::Value> = client.query_documents(&query).await?;
//! ```

pub mod auth;
pub mod error;
pub mod types;

pub use error::{CosmosError, Result};
pub use types::{CosmosOptions, QueryPage, SqlParameter, SqlQuery};

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

const API_VERSION: &str = "2018-12-31";

/// Let the service pick the page size; paging is driven by continuation tokens.
const MAX_ITEM_COUNT: &str = "-1";

const CONTINUATION_HEADER: &str = "x-ms-continuation";

pub struct CosmosClient {
    client: reqwest::Client,
    options: CosmosOptions,
}

impl CosmosClient {
    pub fn new(options: CosmosOptions) -> Result<Self> {
        let endpoint = options.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(CosmosError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                options.endpoint
            )));
        }
        if options.database.trim().is_empty() {
            return Err(CosmosError::Config("database id is empty".to_string()));
        }
        if options.container.trim().is_empty() {
            return Err(CosmosError::Config("container id is empty".to_string()));
        }
        auth::decode_master_key(&options.key)?;

        Ok(Self {
            client: reqwest::Client::new(),
            options,
        })
    }

    pub fn database(&self) -> &str {
        &self.options.database
    }

    pub fn container(&self) -> &str {
        &self.options.container
    }

    /// Resource link of the container, used both in the URL and the signature.
    fn container_link(&self) -> String {
        format!(
            "dbs/{}/colls/{}",
            self.options.database, self.options.container
        )
    }

    fn docs_url(&self) -> String {
        format!(
            "{}/{}/docs",
            self.options.endpoint.trim().trim_end_matches('/'),
            self.container_link()
        )
    }

    /// Run a query and collect every matching document across all pages.
    pub async fn query_documents<T: DeserializeOwned>(&self, query: &SqlQuery) -> Result<Vec<T>> {
        let link = self.container_link();
        let url = self.docs_url();

        let mut documents = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let date = auth::rfc1123_date(Utc::now());
            let token = auth::master_key_token(&self.options.key, "POST", "docs", &link, &date)?;

            let mut request = self
                .client
                .post(&url)
                .header("authorization", token)
                .header("x-ms-date", &date)
                .header("x-ms-version", API_VERSION)
                .header(CONTENT_TYPE, "application/query+json")
                .header("x-ms-documentdb-isquery", "True")
                .header("x-ms-documentdb-query-enablecrosspartition", "True")
                .header("x-ms-max-item-count", MAX_ITEM_COUNT);

            if let Some(token) = &continuation {
                request = request.header(CONTINUATION_HEADER, token);
            }

            let resp = request.json(query).send().await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(CosmosError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            continuation = resp
                .headers()
                .get(CONTINUATION_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            let page: QueryPage<T> = resp.json().await?;
            pages += 1;
            documents.extend(page.documents);

            if continuation.is_none() {
                break;
            }
        }

        tracing::debug!(
            container = %self.options.container,
            pages,
            count = documents.len(),
            "Cosmos query completed"
        );

        Ok(documents)
    }
}
