//! Comment use cases - one invocation object per API operation.

use std::sync::Arc;

use crate::common::DomainResult;
use crate::domains::comments::models::Comment;
use crate::domains::comments::service::CommentService;

pub struct GetCommentsByReviewId {
    service: Arc<dyn CommentService>,
}

impl GetCommentsByReviewId {
    pub fn new(service: Arc<dyn CommentService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, review_id: &str) -> DomainResult<Vec<Comment>> {
        self.service.get_comments_by_review_id(review_id).await
    }
}

pub struct CreateComment {
    service: Arc<dyn CommentService>,
}

impl CreateComment {
    pub fn new(service: Arc<dyn CommentService>) -> Self {
        Self { service }
    }

    pub async fn execute(
        &self,
        review_id: &str,
        content: &str,
        author: &str,
    ) -> DomainResult<Comment> {
        self.service.create_comment(review_id, content, author).await
    }
}

pub struct DeleteComment {
    service: Arc<dyn CommentService>,
}

impl DeleteComment {
    pub fn new(service: Arc<dyn CommentService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, id: &str) -> DomainResult<bool> {
        self.service.delete_comment(id).await
    }
}
