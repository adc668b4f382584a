pub mod data;
pub mod edges;
pub mod models;
pub mod service;
pub mod usecases;

pub use data::{ReviewData, ReviewStatusData};
pub use models::{Review, ReviewChanges, ReviewStatus};
pub use service::{ReviewService, ReviewServiceImpl};
