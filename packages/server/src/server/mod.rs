// HTTP server setup (Axum + GraphQL + REST)
pub mod app;
pub mod graphql;
pub mod routes;

pub use app::*;
pub use graphql::*;
