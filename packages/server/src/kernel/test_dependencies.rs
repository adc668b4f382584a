// TestDependencies - mock repositories for testing
//
// Provides repository doubles that can be injected into ServiceContainer for
// tests: a spy that records calls while delegating to a real store, and
// repositories that fail every call.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use super::{BaseCommentRepository, BaseReviewRepository};
use crate::common::{CommentId, Page, ReviewId, ValidatedPagination};
use crate::domains::comments::models::Comment;
use crate::domains::reviews::models::{Review, ReviewChanges};

// =============================================================================
// Spy Review Repository
// =============================================================================

/// Records the name of every repository call, then delegates.
pub struct SpyReviewRepository<R = super::memory_store::InMemoryReviewRepository> {
    inner: R,
    calls: Arc<Mutex<Vec<String>>>,
}

impl<R: BaseReviewRepository> SpyReviewRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Names of the calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.to_string());
        }
    }
}

#[async_trait]
impl<R: BaseReviewRepository> BaseReviewRepository for SpyReviewRepository<R> {
    async fn find_all(&self, pagination: &ValidatedPagination) -> Result<Page<Review>> {
        self.record("find_all");
        self.inner.find_all(pagination).await
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>> {
        self.record("find_by_id");
        self.inner.find_by_id(id).await
    }

    async fn create(&self, review: Review) -> Result<Review> {
        self.record("create");
        self.inner.create(review).await
    }

    async fn update(
        &self,
        id: ReviewId,
        changes: &ReviewChanges,
        touched_at: DateTime<Utc>,
    ) -> Result<Option<Review>> {
        self.record("update");
        self.inner.update(id, changes, touched_at).await
    }

    async fn delete(&self, id: ReviewId) -> Result<bool> {
        self.record("delete");
        self.inner.delete(id).await
    }
}

// =============================================================================
// Failing Repositories
// =============================================================================

/// Review repository whose every call fails, for exercising internal-error paths.
pub struct FailingReviewRepository;

#[async_trait]
impl BaseReviewRepository for FailingReviewRepository {
    async fn find_all(&self, _pagination: &ValidatedPagination) -> Result<Page<Review>> {
        Err(anyhow!("review store unavailable"))
    }

    async fn find_by_id(&self, _id: ReviewId) -> Result<Option<Review>> {
        Err(anyhow!("review store unavailable"))
    }

    async fn create(&self, _review: Review) -> Result<Review> {
        Err(anyhow!("review store unavailable"))
    }

    async fn update(
        &self,
        _id: ReviewId,
        _changes: &ReviewChanges,
        _touched_at: DateTime<Utc>,
    ) -> Result<Option<Review>> {
        Err(anyhow!("review store unavailable"))
    }

    async fn delete(&self, _id: ReviewId) -> Result<bool> {
        Err(anyhow!("review store unavailable"))
    }
}

/// Comment repository whose every call fails.
pub struct FailingCommentRepository;

#[async_trait]
impl BaseCommentRepository for FailingCommentRepository {
    async fn find_by_review_id(&self, _review_id: ReviewId) -> Result<Vec<Comment>> {
        Err(anyhow!("comment store unavailable"))
    }

    async fn find_by_id(&self, _id: CommentId) -> Result<Option<Comment>> {
        Err(anyhow!("comment store unavailable"))
    }

    async fn create(&self, _comment: Comment) -> Result<Comment> {
        Err(anyhow!("comment store unavailable"))
    }

    async fn delete(&self, _id: CommentId) -> Result<bool> {
        Err(anyhow!("comment store unavailable"))
    }
}
