//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Extension, Request},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::kernel::ServiceContainer;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{
    comments, graphql_batch_handler, graphql_handler, graphql_playground, health_handler, reviews,
    ApiError, GRAPHQL_PATH,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub container: Arc<ServiceContainer>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = GraphQLContext::new(state.container.clone());
    request.extensions_mut().insert(context);

    next.run(request).await
}

async fn not_found() -> impl IntoResponse {
    ApiError::route_not_found()
}

/// Requests still running after `limit` are answered with 408.
fn request_timeout(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}

/// Build the Axum application router
///
/// REST and GraphQL share one `ServiceContainer`.
pub fn build_app(container: Arc<ServiceContainer>, config: &Config) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState { container };

    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let graphql_routes = if config.graphql_playground {
        info!("GraphiQL enabled at GET /graphql");
        post(graphql_handler).get(graphql_playground)
    } else {
        post(graphql_handler)
    };

    Router::new()
        // GraphQL endpoints
        .route(GRAPHQL_PATH, graphql_routes)
        .route("/graphql/batch", post(graphql_batch_handler))
        // REST endpoints
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route(
            "/api/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/api/reviews/:id",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/api/reviews/:id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/comments/:id", delete(comments::delete_comment))
        .fallback(not_found)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(Extension(app_state)) // Add shared state (must be after middlewares that need it)
        .layer(request_timeout(Duration::from_secs(config.request_timeout_secs)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}
