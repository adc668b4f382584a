//! Test harness for integration testing.
//!
//! Each harness owns a fresh in-memory `ServiceContainer`, so tests never
//! share state. The same container backs the GraphQL client and the HTTP
//! router.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use review_core::kernel::ServiceContainer;
use review_core::server::build_app;
use review_core::Config;
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tower::ServiceExt;

use super::GraphQLClient;

/// Response captured from the router.
#[derive(Debug)]
pub struct RestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Value::Null` for an empty body.
    pub body: Value,
    pub text: String,
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Service container - use this for test fixtures.
    pub container: Arc<ServiceContainer>,
    pub config: Config,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // Store is dropped with the container
    }
}

impl TestHarness {
    /// Creates a harness over an empty store.
    pub fn new() -> Self {
        Self::with_container(ServiceContainer::in_memory(false))
    }

    /// Creates a harness over the sample data.
    pub fn seeded() -> Self {
        Self::with_container(ServiceContainer::in_memory(true))
    }

    /// Creates a harness over a custom container (e.g. mock repositories).
    pub fn with_container(container: ServiceContainer) -> Self {
        // Initialize tracing subscriber to respect RUST_LOG environment variable.
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            container: Arc::new(container),
            config: Config {
                graphql_playground: true,
                ..Config::default()
            },
        }
    }

    /// Get a GraphQL client for this harness.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.container.clone())
    }

    /// Build the full HTTP router for this harness.
    pub fn router(&self) -> Router {
        build_app(self.container.clone(), &self.config)
    }

    /// Send one request through the router.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> RestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("Failed to build request");

        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        RestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    pub async fn get(&self, uri: &str) -> RestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> RestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> RestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> RestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
