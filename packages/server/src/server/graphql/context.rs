use sqlx::PgPool;

use crate::common::AdminUser;

/// GraphQL request context
///
/// Shared resources available to all resolvers, plus the acting admin
/// identity when the fronting proxy supplied one for this request.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub acting_admin: Option<AdminUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool, acting_admin: Option<AdminUser>) -> Self {
        Self {
            db_pool,
            acting_admin,
        }
    }
}
