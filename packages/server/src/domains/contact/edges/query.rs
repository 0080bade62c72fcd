use juniper::{FieldError, FieldResult};
use uuid::Uuid;

use crate::common::Page;
use crate::domains::contact::data::{
    ContactMessageConnection, ContactMessageData, ContactPageData, MessageSubjectData,
};
use crate::domains::contact::models::{ContactMessage, ContactPage};
use crate::server::graphql::context::GraphQLContext;

/// Footer contact details. First row wins, published or not.
pub async fn contact_page(ctx: &GraphQLContext) -> FieldResult<Option<ContactPageData>> {
    let page = ContactPage::find_first(&ctx.db_pool).await?;
    Ok(page.map(ContactPageData::from))
}

pub async fn all_contact_pages(ctx: &GraphQLContext) -> FieldResult<Vec<ContactPageData>> {
    let pages = ContactPage::find_all(&ctx.db_pool).await?;
    Ok(pages.into_iter().map(ContactPageData::from).collect())
}

pub async fn contact_message(
    ctx: &GraphQLContext,
    id: String,
) -> FieldResult<Option<ContactMessageData>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid contact message ID", juniper::Value::null()))?;

    let message = ContactMessage::find_by_id(id, &ctx.db_pool).await?;
    Ok(message.map(ContactMessageData::from))
}

/// The admin inbox, newest first.
pub async fn contact_messages(
    ctx: &GraphQLContext,
    resolved: Option<bool>,
    subject: Option<MessageSubjectData>,
    search: Option<String>,
    first: Option<i32>,
    after: Option<String>,
) -> FieldResult<ContactMessageConnection> {
    let page = Page::from_args(first, after.as_deref())?;

    let rows = ContactMessage::admin_search(
        resolved,
        subject.map(Into::into),
        search.as_deref(),
        &page,
        &ctx.db_pool,
    )
    .await?;

    let (rows, page_info) = page.slice(rows, |m| m.id);

    Ok(ContactMessageConnection {
        nodes: rows.into_iter().map(ContactMessageData::from).collect(),
        page_info,
    })
}
