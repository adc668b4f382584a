//! Review use cases - one invocation object per API operation.
//!
//! Each wraps a single [`ReviewService`] method with the same arguments and
//! the same result/error contract. Transports call these rather than the
//! service so each operation can be wired and replaced on its own.

use std::sync::Arc;

use crate::common::{DomainResult, Page, PaginationArgs};
use crate::domains::reviews::models::{Review, ReviewChanges, ReviewStatus};
use crate::domains::reviews::service::ReviewService;

pub struct GetReviews {
    service: Arc<dyn ReviewService>,
}

impl GetReviews {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, pagination: PaginationArgs) -> DomainResult<Page<Review>> {
        self.service.get_reviews(pagination).await
    }
}

pub struct GetReviewById {
    service: Arc<dyn ReviewService>,
}

impl GetReviewById {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &str) -> DomainResult<Option<Review>> {
        self.service.get_review_by_id(id).await
    }
}

pub struct CreateReview {
    service: Arc<dyn ReviewService>,
}

impl CreateReview {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(
        &self,
        title: &str,
        description: &str,
        reviewer: Option<&str>,
    ) -> DomainResult<Review> {
        self.service.create_review(title, description, reviewer).await
    }
}

pub struct UpdateReview {
    service: Arc<dyn ReviewService>,
}

impl UpdateReview {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &str, changes: ReviewChanges) -> DomainResult<Review> {
        self.service.update_review(id, changes).await
    }
}

pub struct UpdateReviewStatus {
    service: Arc<dyn ReviewService>,
}

impl UpdateReviewStatus {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &str, status: ReviewStatus) -> DomainResult<Review> {
        self.service.update_review_status(id, status).await
    }
}

pub struct DeleteReview {
    service: Arc<dyn ReviewService>,
}

impl DeleteReview {
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &str) -> DomainResult<bool> {
        self.service.delete_review(id).await
    }
}
