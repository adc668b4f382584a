// Common types and utilities shared across the application

pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod pagination;
pub mod validation;

pub use entity_ids::*;
pub use errors::{DomainError, DomainResult};
pub use id::Id;
pub use pagination::{Page, PaginationArgs, PaginationData, ValidatedPagination};
