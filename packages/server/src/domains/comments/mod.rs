pub mod data;
pub mod edges;
pub mod models;
pub mod service;
pub mod usecases;

pub use data::CommentData;
pub use models::Comment;
pub use service::{CommentService, CommentServiceImpl};
