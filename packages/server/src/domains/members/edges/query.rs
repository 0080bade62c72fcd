use juniper::{FieldError, FieldResult};
use uuid::Uuid;

use crate::common::Page;
use crate::domains::members::data::{MemberConnection, MemberData, SocietyDesignationData};
use crate::domains::members::models::{Member, SocietyDesignation};
use crate::server::graphql::context::GraphQLContext;

/// Public roster: active members grouped by stored designation key, then name.
pub async fn members(ctx: &GraphQLContext) -> FieldResult<Vec<MemberData>> {
    let rows = Member::find_active(&ctx.db_pool).await?;
    Ok(rows.into_iter().map(MemberData::from).collect())
}

pub async fn member(ctx: &GraphQLContext, id: String) -> FieldResult<Option<MemberData>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid member ID", juniper::Value::null()))?;

    let member = Member::find_by_id(id, &ctx.db_pool).await?;
    Ok(member.map(MemberData::from))
}

/// Admin listing: pending applications and roster rows alike, newest first.
pub async fn all_members(
    ctx: &GraphQLContext,
    designation: Option<SocietyDesignationData>,
    active: Option<bool>,
    search: Option<String>,
    first: Option<i32>,
    after: Option<String>,
) -> FieldResult<MemberConnection> {
    let page = Page::from_args(first, after.as_deref())?;
    let designation = designation.map(SocietyDesignation::from);

    let rows = Member::admin_search(
        designation.as_ref().map(|d| d.as_str()),
        active,
        search.as_deref(),
        &page,
        &ctx.db_pool,
    )
    .await?;

    let (rows, page_info) = page.slice(rows, |m| m.id);

    Ok(MemberConnection {
        nodes: rows.into_iter().map(MemberData::from).collect(),
        page_info,
    })
}
