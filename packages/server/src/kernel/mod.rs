//! Kernel module - repository contracts, storage and wiring.

pub mod container;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use container::ServiceContainer;
pub use memory_store::{InMemoryCommentRepository, InMemoryReviewRepository};
pub use traits::*;
