use juniper::FieldResult;

use crate::domains::updates::data::UpdateData;
use crate::domains::updates::models::Update;
use crate::server::graphql::context::GraphQLContext;

/// Public announcement feed, pinned-first then newest.
pub async fn updates(ctx: &GraphQLContext) -> FieldResult<Vec<UpdateData>> {
    let rows = Update::find_active(&ctx.db_pool).await?;
    Ok(rows.into_iter().map(UpdateData::from).collect())
}

/// Admin listing with optional publication filter and text search.
pub async fn all_updates(
    ctx: &GraphQLContext,
    active: Option<bool>,
    search: Option<String>,
) -> FieldResult<Vec<UpdateData>> {
    let rows = Update::admin_search(active, search.as_deref(), &ctx.db_pool).await?;
    Ok(rows.into_iter().map(UpdateData::from).collect())
}
