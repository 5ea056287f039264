use serde::{Deserialize, Serialize};

/// A parameterized Cosmos DB SQL query.
///
/// Serializes to the `application/query+json` body the REST API expects.
#[derive(Debug, Clone, Serialize)]
pub struct SqlQuery {
    pub query: String,
    pub parameters: Vec<SqlParameter>,
}

impl SqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: Vec::new(),
        }
    }

    /// Bind a named parameter (the name includes the leading `@`).
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.push(SqlParameter {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SqlParameter {
    pub name: String,
    pub value: serde_json::Value,
}

/// One page of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryPage<T> {
    #[serde(rename = "Documents")]
    pub documents: Vec<T>,
}

/// Connection settings for a single container.
#[derive(Debug, Clone)]
pub struct CosmosOptions {
    /// Account endpoint, e.g. `https://account.documents.azure.com:443/`
    pub endpoint: String,
    /// Base64-encoded master key
    pub key: String,
    pub database: String,
    pub container: String,
}
