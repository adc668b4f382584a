use juniper::FieldResult;

use crate::domains::comments::data::{CommentResponse, CreateCommentInput};
use crate::server::graphql::context::GraphQLContext;
use crate::server::graphql::errors::{capture, DeleteResponse};

/// Add a comment. The review id is not checked against stored reviews.
pub async fn create_comment(
    ctx: &GraphQLContext,
    review_id: String,
    input: CreateCommentInput,
) -> FieldResult<CommentResponse> {
    let result = ctx
        .container
        .create_comment()
        .execute(&review_id, &input.content, &input.author)
        .await;
    Ok(capture(result)?.into())
}

pub async fn delete_comment(ctx: &GraphQLContext, id: String) -> FieldResult<DeleteResponse> {
    let result = ctx.container.delete_comment().execute(&id).await;
    Ok(DeleteResponse::from_outcome(capture(result)?, "Comment"))
}
