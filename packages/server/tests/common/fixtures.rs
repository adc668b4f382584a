//! Test fixtures for creating test data.
//!
//! These fixtures go through the use cases, so the data is exactly what a
//! client would have created.

use review_core::domains::comments::models::Comment;
use review_core::domains::reviews::models::{Review, ReviewChanges, ReviewStatus};
use review_core::kernel::ServiceContainer;

/// Create a pending review with a fixed description and no reviewer
pub async fn create_test_review(container: &ServiceContainer, title: &str) -> Review {
    container
        .create_review()
        .execute(title, "Test description", None)
        .await
        .expect("Failed to create test review")
}

/// Create a review and move it to the given status
pub async fn create_test_review_with_status(
    container: &ServiceContainer,
    title: &str,
    status: ReviewStatus,
) -> Review {
    let review = create_test_review(container, title).await;
    container
        .update_review()
        .execute(&review.id.to_string(), ReviewChanges::status(status))
        .await
        .expect("Failed to set test review status")
}

/// Add a comment to a review
pub async fn create_test_comment(
    container: &ServiceContainer,
    review: &Review,
    content: &str,
) -> Comment {
    container
        .create_comment()
        .execute(&review.id.to_string(), content, "Test Author")
        .await
        .expect("Failed to create test comment")
}
