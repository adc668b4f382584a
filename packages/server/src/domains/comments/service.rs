//! Comment service - validation and orchestration over the comment repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::common::validation::required_text;
use crate::common::{CommentId, DomainError, DomainResult, ReviewId};
use crate::domains::comments::models::Comment;
use crate::kernel::BaseCommentRepository;

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comments on a review in creation order. The review itself is not
    /// looked up; an unknown review simply has no comments.
    async fn get_comments_by_review_id(&self, review_id: &str) -> DomainResult<Vec<Comment>>;

    /// Does not check that the review exists.
    async fn create_comment(
        &self,
        review_id: &str,
        content: &str,
        author: &str,
    ) -> DomainResult<Comment>;

    async fn delete_comment(&self, id: &str) -> DomainResult<bool>;
}

pub struct CommentServiceImpl {
    repository: Arc<dyn BaseCommentRepository>,
}

impl CommentServiceImpl {
    pub fn new(repository: Arc<dyn BaseCommentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn get_comments_by_review_id(&self, review_id: &str) -> DomainResult<Vec<Comment>> {
        let Ok(review_id) = ReviewId::parse(review_id) else {
            return Ok(Vec::new());
        };
        Ok(self.repository.find_by_review_id(review_id).await?)
    }

    async fn create_comment(
        &self,
        review_id: &str,
        content: &str,
        author: &str,
    ) -> DomainResult<Comment> {
        let content = required_text("content", "Content", content)?;
        let author = required_text("author", "Author", author)?;
        let review_id = ReviewId::parse(review_id).map_err(|_| {
            DomainError::validation("reviewId", format!("Invalid review id: {}", review_id))
        })?;

        let comment = Comment::new(CommentId::new(), review_id, &content, &author);
        let comment = self.repository.create(comment).await?;

        info!(comment_id = %comment.id, review_id = %comment.review_id, "Comment created");
        Ok(comment)
    }

    async fn delete_comment(&self, id: &str) -> DomainResult<bool> {
        let not_found = || DomainError::not_found("Comment", id);
        let comment_id = CommentId::parse(id).map_err(|_| not_found())?;
        if self.repository.find_by_id(comment_id).await?.is_none() {
            return Err(not_found());
        }

        let deleted = self.repository.delete(comment_id).await?;
        info!(comment_id = %comment_id, deleted, "Comment deleted");
        Ok(deleted)
    }
}
