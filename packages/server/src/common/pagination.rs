//! Offset/limit pagination.
//!
//! ```rust,ignore
//! let args = PaginationArgs { page: Some(2), limit: Some(10) };
//! let validated = args.validate()?;
//! let page = repo.find_all(&validated).await?;
//! let info = PaginationData::new(&validated, page.total);
//! ```

use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use super::validation::positive;
use super::DomainResult;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_LIMIT: i32 = 10;

// ============================================================================
// Pagination Arguments
// ============================================================================

/// Raw pagination input, as received from a transport.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationArgs {
    /// 1-indexed page number (default 1).
    pub page: Option<i32>,
    /// Items per page (default 10).
    pub limit: Option<i32>,
}

impl PaginationArgs {
    pub fn new(page: i32, limit: i32) -> Self {
        PaginationArgs {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Apply defaults and bounds.
    ///
    /// Non-positive `page` or `limit` is a validation error. Any positive
    /// `limit` is taken as given, so page `p` always starts at `(p - 1) * limit`.
    pub fn validate(&self) -> DomainResult<ValidatedPagination> {
        let page = positive("page", self.page.unwrap_or(DEFAULT_PAGE).into())?;
        let limit = positive("limit", self.limit.unwrap_or(DEFAULT_LIMIT).into())?;

        Ok(ValidatedPagination { page, limit })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPagination {
    pub page: usize,
    pub limit: usize,
}

impl ValidatedPagination {
    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Cut this page out of an ordered collection. Pages past the end are empty.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.offset())
            .take(self.limit)
            .cloned()
            .collect()
    }
}

impl Default for ValidatedPagination {
    fn default() -> Self {
        ValidatedPagination {
            page: DEFAULT_PAGE as usize,
            limit: DEFAULT_LIMIT as usize,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// One page of a collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Pagination metadata echoed back to clients.
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[graphql(name = "Pagination", description = "Offset pagination metadata")]
pub struct PaginationData {
    pub page: i32,
    pub limit: i32,
    pub total: i32,
}

impl PaginationData {
    pub fn new(args: &ValidatedPagination, total: usize) -> Self {
        PaginationData {
            page: to_i32(args.page),
            limit: to_i32(args.limit),
            total: to_i32(total),
        }
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let v = PaginationArgs::default().validate().unwrap();
        assert_eq!(v, ValidatedPagination { page: 1, limit: 10 });
    }

    #[test]
    fn large_limits_keep_the_window_formula() {
        let items: Vec<u32> = (0..400).collect();
        let v = PaginationArgs::new(2, 150).validate().unwrap();
        assert_eq!(v.limit, 150);
        assert_eq!(v.offset(), 150);

        let window = v.slice(&items);
        assert_eq!(window.len(), 150);
        assert_eq!(window.first(), Some(&150));
        assert_eq!(window.last(), Some(&299));
    }

    #[test]
    fn zero_page_is_rejected() {
        let err = PaginationArgs::new(0, 10).validate().unwrap_err();
        assert_eq!(err.field(), Some("page"));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = PaginationArgs::new(1, 0).validate().unwrap_err();
        assert_eq!(err.field(), Some("limit"));
    }

    #[test]
    fn slice_takes_the_requested_window() {
        let items: Vec<u32> = (0..25).collect();
        let v = PaginationArgs::new(3, 10).validate().unwrap();
        assert_eq!(v.offset(), 20);
        assert_eq!(v.slice(&items), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn slice_past_the_end_is_empty() {
        let items = vec!["a", "b"];
        let v = PaginationArgs::new(9, 10).validate().unwrap();
        assert!(v.slice(&items).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let v = ValidatedPagination {
            page: usize::MAX,
            limit: usize::MAX,
        };
        assert!(v.slice(&[1, 2, 3]).is_empty());
    }
}
