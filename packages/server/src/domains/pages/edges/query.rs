use juniper::FieldResult;

use crate::domains::pages::data::{
    AboutPageData, CanCreate, HomePageData, JoinPageData, PresidentMessageData,
};
use crate::domains::pages::models::{AboutPage, HomePage, JoinPage, PresidentMessage};
use crate::server::graphql::context::GraphQLContext;

/// Visitor view of the home page. `None` until one exists and is published.
pub async fn home_page(ctx: &GraphQLContext) -> FieldResult<Option<HomePageData>> {
    let page = HomePage::find_first_active(&ctx.db_pool).await?;
    Ok(page.map(HomePageData::from))
}

/// Visitor view of the about page.
pub async fn about_page(ctx: &GraphQLContext) -> FieldResult<Option<AboutPageData>> {
    let page = AboutPage::find_first_active(&ctx.db_pool).await?;
    Ok(page.map(AboutPageData::from))
}

/// Visitor view of the join page.
pub async fn join_page(ctx: &GraphQLContext) -> FieldResult<Option<JoinPageData>> {
    let page = JoinPage::find_first_active(&ctx.db_pool).await?;
    Ok(page.map(JoinPageData::from))
}

/// Visitor view of the president's message.
pub async fn president_message(ctx: &GraphQLContext) -> FieldResult<Option<PresidentMessageData>> {
    let page = PresidentMessage::find_first_active(&ctx.db_pool).await?;
    Ok(page.map(PresidentMessageData::from))
}

/// Admin listing; includes unpublished rows.
pub async fn all_home_pages(ctx: &GraphQLContext) -> FieldResult<Vec<HomePageData>> {
    let pages = HomePage::find_all(&ctx.db_pool).await?;
    Ok(pages.into_iter().map(HomePageData::from).collect())
}

pub async fn all_about_pages(ctx: &GraphQLContext) -> FieldResult<Vec<AboutPageData>> {
    let pages = AboutPage::find_all(&ctx.db_pool).await?;
    Ok(pages.into_iter().map(AboutPageData::from).collect())
}

pub async fn all_join_pages(ctx: &GraphQLContext) -> FieldResult<Vec<JoinPageData>> {
    let pages = JoinPage::find_all(&ctx.db_pool).await?;
    Ok(pages.into_iter().map(JoinPageData::from).collect())
}

pub async fn all_president_messages(ctx: &GraphQLContext) -> FieldResult<Vec<PresidentMessageData>> {
    let pages = PresidentMessage::find_all(&ctx.db_pool).await?;
    Ok(pages.into_iter().map(PresidentMessageData::from).collect())
}

/// Which singleton slots the admin UI may still offer an "add" button for.
pub async fn can_create(ctx: &GraphQLContext) -> FieldResult<CanCreate> {
    Ok(CanCreate {
        home_page: HomePage::can_create(&ctx.db_pool).await?,
        about_page: AboutPage::can_create(&ctx.db_pool).await?,
        join_page: JoinPage::can_create(&ctx.db_pool).await?,
        president_message: PresidentMessage::can_create(&ctx.db_pool).await?,
    })
}
