//! Typed ID definitions for the review domain.
//!
//! ```rust
//! use review_core::common::{CommentId, ReviewId};
//!
//! let review_id = ReviewId::new();
//! let comment_id = CommentId::new();
//! // let wrong: ReviewId = comment_id; // compile error
//! # let _ = (review_id, comment_id);
//! ```

pub use super::id::Id;

/// Marker type for Review entities.
pub struct Review;

/// Marker type for Comment entities.
pub struct Comment;

/// Typed ID for Review entities.
pub type ReviewId = Id<Review>;

/// Typed ID for Comment entities.
pub type CommentId = Id<Comment>;
