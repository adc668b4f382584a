use std::sync::Arc;

use crate::kernel::ServiceContainer;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers
#[derive(Clone)]
pub struct GraphQLContext {
    pub container: Arc<ServiceContainer>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(container: Arc<ServiceContainer>) -> Self {
        Self { container }
    }
}
