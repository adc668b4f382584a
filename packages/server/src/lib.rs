// Design Review API - Core
//
// Tracks design reviews and their comments. Requests flow
// transport (REST / GraphQL) -> use case -> service -> repository,
// with every layer wired once in `kernel::ServiceContainer`.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
