use juniper::FieldResult;

use crate::domains::comments::data::CommentData;
use crate::server::graphql::context::GraphQLContext;
use crate::server::graphql::errors::field_error;

/// Comments on a review, oldest first. Unknown reviews have none.
pub async fn query_comments(ctx: &GraphQLContext, review_id: String) -> FieldResult<Vec<CommentData>> {
    let comments = ctx
        .container
        .get_comments_by_review_id()
        .execute(&review_id)
        .await
        .map_err(|e| field_error(&e))?;
    Ok(comments.into_iter().map(CommentData::from).collect())
}
