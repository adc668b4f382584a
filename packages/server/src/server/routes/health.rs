use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::domains::reviews::data::iso_timestamp;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    message: &'static str,
    timestamp: String,
    version: &'static str,
    graphql_endpoint: &'static str,
    architecture: &'static str,
}

/// Health check endpoint
///
/// The store is in-process, so being able to answer is the whole check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Design Review API is running",
        timestamp: iso_timestamp(&Utc::now()),
        version: env!("CARGO_PKG_VERSION"),
        graphql_endpoint: super::GRAPHQL_PATH,
        architecture: "Layered (use case / service / repository) + GraphQL",
    })
}
