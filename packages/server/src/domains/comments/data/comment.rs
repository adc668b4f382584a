use juniper::{GraphQLInputObject, GraphQLObject};

use crate::domains::comments::models::Comment;
use crate::domains::reviews::data::iso_timestamp;
use crate::server::graphql::errors::ErrorData;

/// GraphQL view of a comment
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "Comment")]
pub struct CommentData {
    pub id: String,
    pub review_id: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

impl From<Comment> for CommentData {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            review_id: comment.review_id.to_string(),
            content: comment.content,
            author: comment.author,
            created_at: iso_timestamp(&comment.created_at),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct CommentResponse {
    pub comment: Option<CommentData>,
    pub error: Option<ErrorData>,
}

impl From<Result<Comment, ErrorData>> for CommentResponse {
    fn from(outcome: Result<Comment, ErrorData>) -> Self {
        match outcome {
            Ok(comment) => Self {
                comment: Some(comment.into()),
                error: None,
            },
            Err(error) => Self {
                comment: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateCommentInput {
    pub content: String,
    pub author: String,
}
