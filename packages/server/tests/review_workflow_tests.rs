//! End-to-end review workflows through the use-case layer.

mod common;

use crate::common::{create_test_review, create_test_review_with_status, TestHarness};
use review_core::common::PaginationArgs;
use review_core::domains::reviews::models::{ReviewChanges, ReviewStatus};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn review_moves_from_pending_to_approved_then_away(ctx: &TestHarness) {
    let container = &ctx.container;
    let review = container
        .create_review()
        .execute("ホームページデザイン", "トップページのリニューアル", Some("田中太郎"))
        .await
        .unwrap();
    assert_eq!(review.status, ReviewStatus::Pending);
    let id = review.id.to_string();

    let approved = container
        .update_review_status()
        .execute(&id, ReviewStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, ReviewStatus::Approved);
    assert!(approved.updated_at >= review.updated_at);
    assert_eq!(approved.created_at, review.created_at);

    assert!(container.delete_review().execute(&id).await.unwrap());
    assert!(container.get_review_by_id().execute(&id).await.unwrap().is_none());
    assert_eq!(
        container.delete_review().execute(&id).await.unwrap_err().code(),
        "NOT_FOUND"
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_update_only_advances_updated_at(ctx: &TestHarness) {
    let review = create_test_review(&ctx.container, "t").await;

    let updated = ctx
        .container
        .update_review()
        .execute(&review.id.to_string(), ReviewChanges::default())
        .await
        .unwrap();

    assert_eq!(updated.title, review.title);
    assert_eq!(updated.description, review.description);
    assert_eq!(updated.status, review.status);
    assert_eq!(updated.reviewer, review.reviewer);
    assert!(updated.updated_at >= review.updated_at);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn listing_reports_total_across_pages(ctx: &TestHarness) {
    for i in 0..12 {
        create_test_review_with_status(&ctx.container, &format!("review {}", i), ReviewStatus::InProgress)
            .await;
    }

    let first = ctx
        .container
        .get_reviews()
        .execute(PaginationArgs::default())
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 12);
    assert!(first.items.iter().all(|r| r.status == ReviewStatus::InProgress));

    let second = ctx
        .container
        .get_reviews()
        .execute(PaginationArgs::new(2, 10))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[1].title, "review 11");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_updates_keep_every_field(ctx: &TestHarness) {
    let review = create_test_review(&ctx.container, "t").await;
    let id = review.id.to_string();

    let title_change = ReviewChanges {
        title: Some("new title".to_string()),
        ..Default::default()
    };
    let status_change = ReviewChanges::status(ReviewStatus::Rejected);

    let (a, b) = tokio::join!(
        ctx.container.update_review().execute(&id, title_change),
        ctx.container.update_review().execute(&id, status_change),
    );
    a.unwrap();
    b.unwrap();

    let stored = ctx
        .container
        .get_review_by_id()
        .execute(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "new title");
    assert_eq!(stored.status, ReviewStatus::Rejected);
}
