//! Review service - validation and orchestration over the review repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::common::validation::{non_blank_update, optional_text, required_text};
use crate::common::{DomainError, DomainResult, Page, PaginationArgs, ReviewId};
use crate::domains::reviews::models::review::timestamp_now;
use crate::domains::reviews::models::{Review, ReviewChanges, ReviewStatus};
use crate::kernel::BaseReviewRepository;

/// Review operations exposed to use cases.
///
/// Identifiers arrive as strings from transports. A string that is not a
/// valid review id cannot name a stored review and is treated as unknown.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn get_reviews(&self, pagination: PaginationArgs) -> DomainResult<Page<Review>>;

    async fn get_review_by_id(&self, id: &str) -> DomainResult<Option<Review>>;

    async fn create_review(
        &self,
        title: &str,
        description: &str,
        reviewer: Option<&str>,
    ) -> DomainResult<Review>;

    async fn update_review(&self, id: &str, changes: ReviewChanges) -> DomainResult<Review>;

    async fn delete_review(&self, id: &str) -> DomainResult<bool>;

    async fn update_review_status(&self, id: &str, status: ReviewStatus) -> DomainResult<Review> {
        self.update_review(id, ReviewChanges::status(status)).await
    }
}

pub struct ReviewServiceImpl {
    repository: Arc<dyn BaseReviewRepository>,
}

impl ReviewServiceImpl {
    pub fn new(repository: Arc<dyn BaseReviewRepository>) -> Self {
        Self { repository }
    }

    /// Resolve an id string to an existing review id, or `NotFound`.
    async fn require_existing(&self, id: &str) -> DomainResult<ReviewId> {
        let not_found = || DomainError::not_found("Review", id);
        let review_id = ReviewId::parse(id).map_err(|_| not_found())?;
        match self.repository.find_by_id(review_id).await? {
            Some(_) => Ok(review_id),
            None => Err(not_found()),
        }
    }
}

/// Check and normalize an update before it reaches storage.
fn validate_changes(changes: ReviewChanges) -> DomainResult<ReviewChanges> {
    Ok(ReviewChanges {
        title: non_blank_update("title", "Title", changes.title.as_deref())?,
        description: non_blank_update("description", "Description", changes.description.as_deref())?,
        status: changes.status,
        reviewer: optional_text(changes.reviewer.as_deref()),
    })
}

#[async_trait]
impl ReviewService for ReviewServiceImpl {
    async fn get_reviews(&self, pagination: PaginationArgs) -> DomainResult<Page<Review>> {
        let pagination = pagination.validate()?;
        let page = self.repository.find_all(&pagination).await?;
        debug!(
            page = pagination.page,
            limit = pagination.limit,
            returned = page.items.len(),
            total = page.total,
            "Listed reviews"
        );
        Ok(page)
    }

    async fn get_review_by_id(&self, id: &str) -> DomainResult<Option<Review>> {
        let Ok(review_id) = ReviewId::parse(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(review_id).await?)
    }

    async fn create_review(
        &self,
        title: &str,
        description: &str,
        reviewer: Option<&str>,
    ) -> DomainResult<Review> {
        let title = required_text("title", "Title", title)?;
        let description = required_text("description", "Description", description)?;

        let review = Review::new(
            ReviewId::new(),
            &title,
            &description,
            ReviewStatus::Pending,
            reviewer,
        );
        let review = self.repository.create(review).await?;

        info!(review_id = %review.id, title = %review.title, "Review created");
        Ok(review)
    }

    async fn update_review(&self, id: &str, changes: ReviewChanges) -> DomainResult<Review> {
        let review_id = self.require_existing(id).await?;
        let changes = validate_changes(changes)?;

        let review = self
            .repository
            .update(review_id, &changes, timestamp_now())
            .await?
            .ok_or_else(|| DomainError::not_found("Review", id))?;

        info!(review_id = %review.id, status = %review.status, "Review updated");
        Ok(review)
    }

    async fn delete_review(&self, id: &str) -> DomainResult<bool> {
        let review_id = self.require_existing(id).await?;
        let deleted = self.repository.delete(review_id).await?;

        info!(review_id = %review_id, deleted, "Review deleted");
        Ok(deleted)
    }
}
