//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldResult, RootNode};

use super::context::GraphQLContext;
use super::errors::DeleteResponse;

use crate::common::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::domains::comments::data::{CommentData, CommentResponse, CreateCommentInput};
use crate::domains::comments::edges as comment_edges;
use crate::domains::reviews::data::{
    CreateReviewInput, ReviewResponse, ReviewsResponse, UpdateReviewInput,
};
use crate::domains::reviews::edges as review_edges;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Review Queries
    // =========================================================================

    /// Paginated reviews in creation order
    async fn reviews(
        ctx: &GraphQLContext,
        #[graphql(default = DEFAULT_PAGE)] page: i32,
        #[graphql(default = DEFAULT_LIMIT)] limit: i32,
    ) -> FieldResult<ReviewsResponse> {
        review_edges::query_reviews(ctx, page, limit).await
    }

    /// A single review; `error` is `NOT_FOUND` when it does not exist
    async fn review(ctx: &GraphQLContext, id: String) -> FieldResult<ReviewResponse> {
        review_edges::query_review(ctx, id).await
    }

    // =========================================================================
    // Comment Queries
    // =========================================================================

    async fn comments(ctx: &GraphQLContext, review_id: String) -> FieldResult<Vec<CommentData>> {
        comment_edges::query_comments(ctx, review_id).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Review Mutations
    // =========================================================================

    /// Create a review in the pending state
    async fn create_review(
        ctx: &GraphQLContext,
        input: CreateReviewInput,
    ) -> FieldResult<ReviewResponse> {
        review_edges::create_review(ctx, input).await
    }

    async fn update_review(
        ctx: &GraphQLContext,
        id: String,
        input: Option<UpdateReviewInput>,
    ) -> FieldResult<ReviewResponse> {
        review_edges::update_review(ctx, id, input).await
    }

    /// Delete a review. Its comments are left in place.
    async fn delete_review(ctx: &GraphQLContext, id: String) -> FieldResult<DeleteResponse> {
        review_edges::delete_review(ctx, id).await
    }

    // =========================================================================
    // Comment Mutations
    // =========================================================================

    async fn create_comment(
        ctx: &GraphQLContext,
        review_id: String,
        input: CreateCommentInput,
    ) -> FieldResult<CommentResponse> {
        comment_edges::create_comment(ctx, review_id, input).await
    }

    async fn delete_comment(ctx: &GraphQLContext, id: String) -> FieldResult<DeleteResponse> {
        comment_edges::delete_comment(ctx, id).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
