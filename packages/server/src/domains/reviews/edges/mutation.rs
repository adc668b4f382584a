use juniper::FieldResult;
use tracing::info;

use crate::domains::reviews::data::{CreateReviewInput, ReviewResponse, UpdateReviewInput};
use crate::server::graphql::context::GraphQLContext;
use crate::server::graphql::errors::{capture, DeleteResponse};

pub async fn create_review(
    ctx: &GraphQLContext,
    input: CreateReviewInput,
) -> FieldResult<ReviewResponse> {
    let result = ctx
        .container
        .create_review()
        .execute(&input.title, &input.description, input.reviewer.as_deref())
        .await;
    Ok(capture(result)?.into())
}

/// Merge the given fields into an existing review
pub async fn update_review(
    ctx: &GraphQLContext,
    id: String,
    input: Option<UpdateReviewInput>,
) -> FieldResult<ReviewResponse> {
    let changes = input.unwrap_or_default().into();
    let result = ctx.container.update_review().execute(&id, changes).await;
    Ok(capture(result)?.into())
}

pub async fn delete_review(ctx: &GraphQLContext, id: String) -> FieldResult<DeleteResponse> {
    info!(review_id = %id, "Deleting review via GraphQL");
    let result = ctx.container.delete_review().execute(&id).await;
    Ok(DeleteResponse::from_outcome(capture(result)?, "Review"))
}
