//! In-memory repositories.
//!
//! Entities live in an ordered `Vec` behind a `tokio::sync::RwLock`. Every
//! operation holds a single guard for its whole duration, so a mutation is
//! never observed half-applied. Nothing survives a restart.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{BaseCommentRepository, BaseReviewRepository};
use crate::common::{CommentId, Page, ReviewId, ValidatedPagination};
use crate::domains::comments::models::Comment;
use crate::domains::reviews::models::{Review, ReviewChanges, ReviewStatus};

// =============================================================================
// Sample data
// =============================================================================

/// Identifiers of the seeded sample reviews.
pub const SAMPLE_REVIEW_IDS: [ReviewId; 2] = [ReviewId::from_u128(1), ReviewId::from_u128(2)];

/// Identifiers of the seeded sample comments (both on the first review).
pub const SAMPLE_COMMENT_IDS: [CommentId; 2] = [CommentId::from_u128(1), CommentId::from_u128(2)];

fn sample_time(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: SAMPLE_REVIEW_IDS[0],
            title: "ホームページデザイン".into(),
            description: "新しいホームページのデザイン案です。".into(),
            status: ReviewStatus::Pending,
            reviewer: Some("田中太郎".into()),
            created_at: sample_time(15, 10, 0),
            updated_at: sample_time(15, 10, 0),
        },
        Review {
            id: SAMPLE_REVIEW_IDS[1],
            title: "ロゴデザイン".into(),
            description: "会社の新しいロゴデザイン案です。".into(),
            status: ReviewStatus::Approved,
            reviewer: Some("佐藤花子".into()),
            created_at: sample_time(14, 14, 30),
            updated_at: sample_time(16, 9, 15),
        },
    ]
}

fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: SAMPLE_COMMENT_IDS[0],
            review_id: SAMPLE_REVIEW_IDS[0],
            content: "色合いをもう少し明るくした方が良いと思います。".into(),
            author: "レビュアー1".into(),
            created_at: sample_time(15, 11, 0),
        },
        Comment {
            id: SAMPLE_COMMENT_IDS[1],
            review_id: SAMPLE_REVIEW_IDS[0],
            content: "レイアウトは良いと思いますが、フォントサイズを調整してください。".into(),
            author: "レビュアー2".into(),
            created_at: sample_time(15, 12, 0),
        },
    ]
}

// =============================================================================
// Reviews
// =============================================================================

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the two sample reviews.
    pub fn seeded() -> Self {
        Self {
            reviews: RwLock::new(sample_reviews()),
        }
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BaseReviewRepository for InMemoryReviewRepository {
    async fn find_all(&self, pagination: &ValidatedPagination) -> Result<Page<Review>> {
        let reviews = self.reviews.read().await;
        Ok(Page {
            items: pagination.slice(&reviews),
            total: reviews.len(),
        })
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, review: Review) -> Result<Review> {
        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        debug!(review_id = %review.id, total = reviews.len(), "Stored review");
        Ok(review)
    }

    async fn update(
        &self,
        id: ReviewId,
        changes: &ReviewChanges,
        touched_at: DateTime<Utc>,
    ) -> Result<Option<Review>> {
        let mut reviews = self.reviews.write().await;
        let Some(review) = reviews.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        changes.apply_to(review, touched_at);
        Ok(Some(review.clone()))
    }

    async fn delete(&self, id: ReviewId) -> Result<bool> {
        let mut reviews = self.reviews.write().await;
        match reviews.iter().position(|r| r.id == id) {
            Some(index) => {
                reviews.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// =============================================================================
// Comments
// =============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the two sample comments.
    pub fn seeded() -> Self {
        Self {
            comments: RwLock::new(sample_comments()),
        }
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BaseCommentRepository for InMemoryCommentRepository {
    async fn find_by_review_id(&self, review_id: ReviewId) -> Result<Vec<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.review_id == review_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, comment: Comment) -> Result<Comment> {
        let mut comments = self.comments.write().await;
        comments.push(comment.clone());
        debug!(comment_id = %comment.id, review_id = %comment.review_id, "Stored comment");
        Ok(comment)
    }

    async fn delete(&self, id: CommentId) -> Result<bool> {
        let mut comments = self.comments.write().await;
        match comments.iter().position(|c| c.id == id) {
            Some(index) => {
                comments.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
