use juniper::FieldResult;

use crate::domains::gallery::data::GalleryImageData;
use crate::domains::gallery::models::GalleryImage;
use crate::server::graphql::context::GraphQLContext;

/// Published gallery, newest upload first.
pub async fn gallery(ctx: &GraphQLContext) -> FieldResult<Vec<GalleryImageData>> {
    let rows = GalleryImage::find_active(&ctx.db_pool).await?;
    Ok(rows.into_iter().map(GalleryImageData::from).collect())
}

/// Admin listing with optional publication filter and caption search.
pub async fn all_gallery_images(
    ctx: &GraphQLContext,
    active: Option<bool>,
    search: Option<String>,
) -> FieldResult<Vec<GalleryImageData>> {
    let rows = GalleryImage::admin_search(active, search.as_deref(), &ctx.db_pool).await?;
    Ok(rows.into_iter().map(GalleryImageData::from).collect())
}
