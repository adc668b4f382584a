// Business domains
pub mod comments;
pub mod reviews;
