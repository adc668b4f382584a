//! Domain errors as GraphQL data.
//!
//! Lookups and mutations report expected failures (not found, validation,
//! conflict) inside their payload's `error` field. Anything else becomes a
//! GraphQL error whose extensions carry the error code and kind.

use juniper::{graphql_value, FieldError, FieldResult, GraphQLObject};
use tracing::{error, warn};

use crate::common::{DomainError, DomainResult};

/// Error payload: `{ code, message, field }`.
#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject)]
#[graphql(name = "Error")]
pub struct ErrorData {
    pub code: String,
    pub message: String,
    pub field: Option<String>,
}

impl From<&DomainError> for ErrorData {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            field: err.field().map(str::to_string),
        }
    }
}

/// Result of a delete mutation. `success` holds a human-readable message.
#[derive(Debug, Clone, GraphQLObject)]
pub struct DeleteResponse {
    pub success: Option<String>,
    pub error: Option<ErrorData>,
}

impl DeleteResponse {
    pub fn from_outcome(outcome: Result<bool, ErrorData>, what: &str) -> Self {
        match outcome {
            Ok(true) => Self {
                success: Some(format!("{} deleted successfully", what)),
                error: None,
            },
            Ok(false) => Self {
                success: Some(format!("Failed to delete {}", what.to_lowercase())),
                error: None,
            },
            Err(error) => Self {
                success: None,
                error: Some(error),
            },
        }
    }
}

/// Convert any domain error into a GraphQL error.
///
/// Internal failures are logged and reported without their cause.
pub fn field_error(err: &DomainError) -> FieldError {
    let code = err.code();
    let kind = err.kind();
    if err.is_domain() {
        warn!(code, error = %err, "GraphQL request rejected");
        FieldError::new(err.to_string(), graphql_value!({ "code": code, "type": kind }))
    } else {
        error!(error = %err, "GraphQL resolver failed");
        FieldError::new(
            "Internal server error",
            graphql_value!({ "code": "INTERNAL_ERROR", "type": "InternalError" }),
        )
    }
}

/// Split a use-case result into payload data or a GraphQL error.
pub fn capture<T>(result: DomainResult<T>) -> FieldResult<Result<T, ErrorData>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(err) if err.is_domain() => Ok(Err(ErrorData::from(&err))),
        Err(err) => Err(field_error(&err)),
    }
}
