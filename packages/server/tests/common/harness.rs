//! Test harness driving the full router against in-memory stores.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use skateway_core::kernel::{BaseDocumentStore, InMemoryDocumentStore, ServerDeps};
use skateway_core::server::build_app;
use skateway_core::CosmosSettings;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Test harness that wires the router to an in-memory store.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     ctx.store.insert(vec![window_at("nac", 1, "Safe")]);
///     let res = ctx.get("/api/latest").await;
/// }
/// ```
pub struct TestHarness {
    /// Seed records here; the router reads them on every request.
    pub store: Arc<InMemoryDocumentStore>,
    /// Settings reported by `/health`
    pub cosmos: CosmosSettings,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // Store is dropped with the harness
    }
}

impl TestHarness {
    pub fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            cosmos: CosmosSettings {
                endpoint: Some("https://skateway-test.documents.azure.com:443/".to_string()),
                key: Some("dGVzdC1rZXk=".to_string()),
                database: Some("telemetry".to_string()),
                container: Some("windows".to_string()),
            },
        }
    }

    /// Router backed by the harness store
    pub fn app(&self) -> Router {
        build_app(
            ServerDeps::new(self.store.clone()),
            self.cosmos.clone(),
            &[],
        )
    }

    /// Router backed by an arbitrary store (e.g. a failing one)
    pub fn app_with_store(&self, store: Arc<dyn BaseDocumentStore>) -> Router {
        build_app(ServerDeps::new(store), self.cosmos.clone(), &[])
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        send_get(self.app(), uri).await
    }
}

/// Issue a GET against a router and buffer the whole response
pub async fn send_get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
