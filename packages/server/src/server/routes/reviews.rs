//! REST handlers for reviews.

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::validation::one_of;
use crate::common::{DomainError, PaginationArgs, PaginationData};
use crate::domains::comments::models::Comment;
use crate::domains::reviews::models::{Review, ReviewChanges};
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiError, JsonBody};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateReviewBody {
    pub title: String,
    pub description: String,
    pub reviewer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateReviewBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub reviewer: Option<String>,
}

impl UpdateReviewBody {
    fn into_changes(self) -> Result<ReviewChanges, ApiError> {
        let status = self
            .status
            .as_deref()
            .map(|s| one_of("status", s))
            .transpose()?;
        Ok(ReviewChanges {
            title: self.title,
            description: self.description,
            status,
            reviewer: self.reviewer,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
    pub pagination: PaginationData,
}

#[derive(Debug, Serialize)]
pub struct ReviewWithComments {
    #[serde(flatten)]
    pub review: Review,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/reviews
pub async fn list_reviews(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<PaginationArgs>, QueryRejection>,
) -> Result<Json<ReviewListResponse>, ApiError> {
    let Query(args) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let page = state.container.get_reviews().execute(args).await?;
    let validated = args.validate()?;

    Ok(Json(ReviewListResponse {
        pagination: PaginationData::new(&validated, page.total),
        reviews: page.items,
    }))
}

/// GET /api/reviews/:id
pub async fn get_review(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewWithComments>, ApiError> {
    let review = state
        .container
        .get_review_by_id()
        .execute(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Review", id.as_str()))?;
    let comments = state
        .container
        .get_comments_by_review_id()
        .execute(&id)
        .await?;

    Ok(Json(ReviewWithComments { review, comments }))
}

/// POST /api/reviews
pub async fn create_review(
    Extension(state): Extension<AxumAppState>,
    JsonBody(body): JsonBody<CreateReviewBody>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = state
        .container
        .create_review()
        .execute(&body.title, &body.description, body.reviewer.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /api/reviews/:id
pub async fn update_review(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateReviewBody>,
) -> Result<Json<Review>, ApiError> {
    let changes = body.into_changes()?;
    let review = state.container.update_review().execute(&id, changes).await?;
    Ok(Json(review))
}

/// DELETE /api/reviews/:id
pub async fn delete_review(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.container.delete_review().execute(&id).await?;
    Ok(Json(MessageResponse {
        message: format!("Review {} deleted successfully", id),
    }))
}
