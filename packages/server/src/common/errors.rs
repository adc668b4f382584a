use thiserror::Error;

/// Result type alias for service and use-case operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised by the review domain.
///
/// Every variant maps to a stable machine-readable [`code`](DomainError::code)
/// that transports hand back to clients.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The referenced entity does not exist.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// An input field failed a validation rule.
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    /// The request conflicts with current state.
    #[error("{message}")]
    Conflict { message: String },

    /// Storage or wiring failure with no domain meaning.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const CONFLICT: &'static str = "CONFLICT";
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            field: Some(field),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => Self::NOT_FOUND,
            DomainError::Validation { .. } => Self::VALIDATION_ERROR,
            DomainError::Conflict { .. } => Self::CONFLICT,
            DomainError::Internal(_) => Self::INTERNAL_ERROR,
        }
    }

    /// The input field at fault, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => *field,
            _ => None,
        }
    }

    /// Name of the error kind, reported in GraphQL error extensions.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NotFoundError",
            DomainError::Validation { .. } => "ValidationError",
            DomainError::Conflict { .. } => "ConflictError",
            DomainError::Internal(_) => "InternalError",
        }
    }

    /// True for errors the caller can act on (everything but `Internal`).
    pub fn is_domain(&self) -> bool {
        !matches!(self, DomainError::Internal(_))
    }
}
