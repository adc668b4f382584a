//! REST handlers for comments.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::comments::models::Comment;
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiError, JsonBody};
use crate::server::routes::reviews::MessageResponse;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCommentBody {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}

/// GET /api/reviews/:id/comments
pub async fn list_comments(
    Extension(state): Extension<AxumAppState>,
    Path(review_id): Path<String>,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = state
        .container
        .get_comments_by_review_id()
        .execute(&review_id)
        .await?;
    Ok(Json(CommentListResponse { comments }))
}

/// POST /api/reviews/:id/comments
pub async fn create_comment(
    Extension(state): Extension<AxumAppState>,
    Path(review_id): Path<String>,
    JsonBody(body): JsonBody<CreateCommentBody>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state
        .container
        .create_comment()
        .execute(&review_id, &body.content, &body.author)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /api/comments/:id
pub async fn delete_comment(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.container.delete_comment().execute(&id).await?;
    Ok(Json(MessageResponse {
        message: format!("Comment {} deleted successfully", id),
    }))
}
