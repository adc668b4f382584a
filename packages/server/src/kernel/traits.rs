// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - storage contracts with no business
// rules. Validation, existence checks, identifier generation and timestamping
// belong to the domain services that call them.
//
// Naming convention: Base* for trait names (e.g., BaseReviewRepository)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{CommentId, Page, ReviewId, ValidatedPagination};
use crate::domains::comments::models::Comment;
use crate::domains::reviews::models::{Review, ReviewChanges};

// =============================================================================
// Review Repository
// =============================================================================

#[async_trait]
pub trait BaseReviewRepository: Send + Sync {
    /// One page of reviews in insertion order, plus the total count
    async fn find_all(&self, pagination: &ValidatedPagination) -> Result<Page<Review>>;

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>>;

    /// Store a review as given. Callers supply a fresh identifier; no
    /// uniqueness check is made here.
    async fn create(&self, review: Review) -> Result<Review>;

    /// Merge `changes` into the stored review, stamping `touched_at`.
    /// Returns `None` if no review has this id.
    async fn update(
        &self,
        id: ReviewId,
        changes: &ReviewChanges,
        touched_at: DateTime<Utc>,
    ) -> Result<Option<Review>>;

    /// Returns whether a review was removed
    async fn delete(&self, id: ReviewId) -> Result<bool>;
}

// =============================================================================
// Comment Repository
// =============================================================================

#[async_trait]
pub trait BaseCommentRepository: Send + Sync {
    /// All comments on a review, in insertion order
    async fn find_by_review_id(&self, review_id: ReviewId) -> Result<Vec<Comment>>;

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>>;

    async fn create(&self, comment: Comment) -> Result<Comment>;

    /// Returns whether a comment was removed
    async fn delete(&self, id: CommentId) -> Result<bool>;
}
