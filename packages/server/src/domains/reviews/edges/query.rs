use juniper::FieldResult;

use crate::common::{DomainError, PaginationArgs, PaginationData};
use crate::domains::reviews::data::{ReviewData, ReviewResponse, ReviewsResponse};
use crate::server::graphql::context::GraphQLContext;
use crate::server::graphql::errors::{capture, field_error, ErrorData};

/// List reviews, one page at a time
pub async fn query_reviews(
    ctx: &GraphQLContext,
    page: i32,
    limit: i32,
) -> FieldResult<ReviewsResponse> {
    let args = PaginationArgs::new(page, limit);
    let result = ctx
        .container
        .get_reviews()
        .execute(args)
        .await
        .map_err(|e| field_error(&e))?;
    let validated = args.validate().map_err(|e| field_error(&e))?;

    Ok(ReviewsResponse {
        pagination: PaginationData::new(&validated, result.total),
        reviews: result.items.into_iter().map(ReviewData::from).collect(),
    })
}

/// Look up one review. A missing review is reported in the payload.
pub async fn query_review(ctx: &GraphQLContext, id: String) -> FieldResult<ReviewResponse> {
    let outcome = match capture(ctx.container.get_review_by_id().execute(&id).await)? {
        Ok(Some(review)) => Ok(review),
        Ok(None) => Err(ErrorData::from(&DomainError::not_found("Review", id))),
        Err(error) => Err(error),
    };
    Ok(outcome.into())
}
