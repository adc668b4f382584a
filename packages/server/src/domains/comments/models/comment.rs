use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommentId, ReviewId};
use crate::domains::reviews::models::review::timestamp_now;

/// Comment model - feedback left on a review
///
/// `review_id` is a weak reference: nothing guarantees the review still
/// exists, and deleting a review leaves its comments in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub review_id: ReviewId,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: CommentId, review_id: ReviewId, content: &str, author: &str) -> Self {
        Self {
            id,
            review_id,
            content: content.trim().to_string(),
            author: author.trim().to_string(),
            created_at: timestamp_now(),
        }
    }
}
