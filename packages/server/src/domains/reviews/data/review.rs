use chrono::{DateTime, SecondsFormat, Utc};
use juniper::{FieldResult, GraphQLEnum, GraphQLInputObject, GraphQLObject};

use crate::common::PaginationData;
use crate::domains::comments::data::CommentData;
use crate::domains::reviews::models::{Review, ReviewChanges, ReviewStatus};
use crate::server::graphql::context::GraphQLContext;
use crate::server::graphql::errors::{field_error, ErrorData};

/// Millisecond ISO-8601 form used for every timestamp in GraphQL payloads.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
#[graphql(name = "ReviewStatus")]
pub enum ReviewStatusData {
    Pending,
    Approved,
    Rejected,
    InProgress,
}

impl From<ReviewStatus> for ReviewStatusData {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => Self::Pending,
            ReviewStatus::Approved => Self::Approved,
            ReviewStatus::Rejected => Self::Rejected,
            ReviewStatus::InProgress => Self::InProgress,
        }
    }
}

impl From<ReviewStatusData> for ReviewStatus {
    fn from(status: ReviewStatusData) -> Self {
        match status {
            ReviewStatusData::Pending => Self::Pending,
            ReviewStatusData::Approved => Self::Approved,
            ReviewStatusData::Rejected => Self::Rejected,
            ReviewStatusData::InProgress => Self::InProgress,
        }
    }
}

/// GraphQL view of a review
#[derive(Debug, Clone)]
pub struct ReviewData {
    review: Review,
}

impl From<Review> for ReviewData {
    fn from(review: Review) -> Self {
        Self { review }
    }
}

#[juniper::graphql_object(name = "Review", context = GraphQLContext)]
impl ReviewData {
    fn id(&self) -> String {
        self.review.id.to_string()
    }
    fn title(&self) -> &str {
        &self.review.title
    }
    fn description(&self) -> &str {
        &self.review.description
    }
    fn status(&self) -> ReviewStatusData {
        self.review.status.into()
    }
    fn reviewer(&self) -> Option<&str> {
        self.review.reviewer.as_deref()
    }
    fn created_at(&self) -> String {
        iso_timestamp(&self.review.created_at)
    }
    fn updated_at(&self) -> String {
        iso_timestamp(&self.review.updated_at)
    }

    /// Comments on this review, oldest first
    async fn comments(&self, context: &GraphQLContext) -> FieldResult<Vec<CommentData>> {
        let comments = context
            .container
            .get_comments_by_review_id()
            .execute(&self.review.id.to_string())
            .await
            .map_err(|e| field_error(&e))?;
        Ok(comments.into_iter().map(CommentData::from).collect())
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewData>,
    pub pagination: PaginationData,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct ReviewResponse {
    pub review: Option<ReviewData>,
    pub error: Option<ErrorData>,
}

impl From<Result<Review, ErrorData>> for ReviewResponse {
    fn from(outcome: Result<Review, ErrorData>) -> Self {
        match outcome {
            Ok(review) => Self {
                review: Some(review.into()),
                error: None,
            },
            Err(error) => Self {
                review: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateReviewInput {
    pub title: String,
    pub description: String,
    pub reviewer: Option<String>,
}

/// Fields to change; omitted fields keep their current value
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateReviewInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ReviewStatusData>,
    pub reviewer: Option<String>,
}

impl From<UpdateReviewInput> for ReviewChanges {
    fn from(input: UpdateReviewInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            status: input.status.map(ReviewStatus::from),
            reviewer: input.reviewer,
        }
    }
}
