//! GraphQL over HTTP.
//!
//! Query-level failures (parse or validation errors) answer 400; field
//! errors travel inside a 200 response next to whatever data resolved.

use crate::server::graphql::{GraphQLContext, Schema};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLBatchRequest, GraphQLRequest};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Endpoint GraphiQL sends queries to.
pub const GRAPHQL_PATH: &str = "/graphql";

fn reply(ok: bool, body: impl Serialize) -> Response {
    if ok {
        (StatusCode::OK, Json(body)).into_response()
    } else {
        debug!("Rejected GraphQL request");
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// POST /graphql
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request.execute(&schema, &context).await;
    reply(response.is_ok(), response)
}

/// POST /graphql/batch, a single request or an array of them
pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let response = batch.execute(&schema, &context).await;
    reply(response.is_ok(), response)
}

/// GET /graphql when the playground is enabled
pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source(GRAPHQL_PATH, None))
}
