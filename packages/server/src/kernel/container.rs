//! Service container - the composition root.
//!
//! Builds repositories -> services -> use cases once, at startup, and hands
//! the result to every transport behind an `Arc`. Tests build their own
//! container around mock repositories with [`ServiceContainer::new`].

use std::sync::Arc;

use tracing::info;

use crate::domains::comments::service::{CommentService, CommentServiceImpl};
use crate::domains::comments::usecases::{CreateComment, DeleteComment, GetCommentsByReviewId};
use crate::domains::reviews::service::{ReviewService, ReviewServiceImpl};
use crate::domains::reviews::usecases::{
    CreateReview, DeleteReview, GetReviewById, GetReviews, UpdateReview, UpdateReviewStatus,
};
use crate::kernel::memory_store::{InMemoryCommentRepository, InMemoryReviewRepository};
use crate::kernel::{BaseCommentRepository, BaseReviewRepository};

pub struct ServiceContainer {
    get_reviews: GetReviews,
    get_review_by_id: GetReviewById,
    create_review: CreateReview,
    update_review: UpdateReview,
    update_review_status: UpdateReviewStatus,
    delete_review: DeleteReview,
    get_comments_by_review_id: GetCommentsByReviewId,
    create_comment: CreateComment,
    delete_comment: DeleteComment,
}

impl ServiceContainer {
    /// Wire services and use cases over the given repositories.
    pub fn new(
        review_repository: Arc<dyn BaseReviewRepository>,
        comment_repository: Arc<dyn BaseCommentRepository>,
    ) -> Self {
        let review_service: Arc<dyn ReviewService> =
            Arc::new(ReviewServiceImpl::new(review_repository));
        let comment_service: Arc<dyn CommentService> =
            Arc::new(CommentServiceImpl::new(comment_repository));

        Self {
            get_reviews: GetReviews::new(review_service.clone()),
            get_review_by_id: GetReviewById::new(review_service.clone()),
            create_review: CreateReview::new(review_service.clone()),
            update_review: UpdateReview::new(review_service.clone()),
            update_review_status: UpdateReviewStatus::new(review_service.clone()),
            delete_review: DeleteReview::new(review_service),
            get_comments_by_review_id: GetCommentsByReviewId::new(comment_service.clone()),
            create_comment: CreateComment::new(comment_service.clone()),
            delete_comment: DeleteComment::new(comment_service),
        }
    }

    /// Production wiring over the in-memory repositories.
    pub fn in_memory(seed_sample_data: bool) -> Self {
        let (reviews, comments) = if seed_sample_data {
            (
                InMemoryReviewRepository::seeded(),
                InMemoryCommentRepository::seeded(),
            )
        } else {
            (
                InMemoryReviewRepository::new(),
                InMemoryCommentRepository::new(),
            )
        };
        info!(seed_sample_data, "Wiring in-memory service container");

        Self::new(Arc::new(reviews), Arc::new(comments))
    }

    pub fn get_reviews(&self) -> &GetReviews {
        &self.get_reviews
    }

    pub fn get_review_by_id(&self) -> &GetReviewById {
        &self.get_review_by_id
    }

    pub fn create_review(&self) -> &CreateReview {
        &self.create_review
    }

    pub fn update_review(&self) -> &UpdateReview {
        &self.update_review
    }

    pub fn update_review_status(&self) -> &UpdateReviewStatus {
        &self.update_review_status
    }

    pub fn delete_review(&self) -> &DeleteReview {
        &self.delete_review
    }

    pub fn get_comments_by_review_id(&self) -> &GetCommentsByReviewId {
        &self.get_comments_by_review_id
    }

    pub fn create_comment(&self) -> &CreateComment {
        &self.create_comment
    }

    pub fn delete_comment(&self) -> &DeleteComment {
        &self.delete_comment
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::in_memory(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PaginationArgs, ReviewId};
    use crate::domains::reviews::models::ReviewStatus;
    use crate::kernel::memory_store::SAMPLE_REVIEW_IDS;
    use crate::kernel::test_dependencies::{FailingReviewRepository, SpyReviewRepository};

    #[tokio::test]
    async fn seeded_container_serves_sample_reviews() {
        let container = ServiceContainer::in_memory(true);
        let page = container
            .get_reviews()
            .execute(PaginationArgs::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);

        let comments = container
            .get_comments_by_review_id()
            .execute(&SAMPLE_REVIEW_IDS[0].to_string())
            .await
            .unwrap();
        assert_eq!(comments.len(), 2);
    }

    #[tokio::test]
    async fn unseeded_container_starts_empty() {
        let container = ServiceContainer::in_memory(false);
        let page = container
            .get_reviews()
            .execute(PaginationArgs::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn use_cases_share_one_store() {
        let container = ServiceContainer::in_memory(false);
        let created = container
            .create_review()
            .execute("title", "description", None)
            .await
            .unwrap();
        let id = created.id.to_string();

        container
            .update_review_status()
            .execute(&id, ReviewStatus::Rejected)
            .await
            .unwrap();
        let fetched = container.get_review_by_id().execute(&id).await.unwrap();
        assert_eq!(fetched.map(|r| r.status), Some(ReviewStatus::Rejected));

        assert!(container.delete_review().execute(&id).await.unwrap());
        assert!(container
            .get_review_by_id()
            .execute(&id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn mock_repositories_are_injected() {
        let spy = Arc::new(SpyReviewRepository::new(InMemoryReviewRepository::new()));
        let container = ServiceContainer::new(spy.clone(), Arc::new(InMemoryCommentRepository::new()));

        container
            .get_review_by_id()
            .execute(&ReviewId::new().to_string())
            .await
            .unwrap();

        assert_eq!(spy.calls(), vec!["find_by_id".to_string()]);
    }

    #[tokio::test]
    async fn repository_failures_surface_as_internal_errors() {
        let container = ServiceContainer::new(
            Arc::new(FailingReviewRepository),
            Arc::new(InMemoryCommentRepository::new()),
        );
        let err = container
            .create_review()
            .execute("t", "d", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
