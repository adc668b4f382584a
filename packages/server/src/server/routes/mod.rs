// HTTP routes
pub mod comments;
pub mod error;
pub mod graphql;
pub mod health;
pub mod reviews;

pub use error::*;
pub use graphql::*;
pub use health::*;
