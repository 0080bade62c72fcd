use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::domains::gallery::data::GalleryImageData;
use crate::domains::gallery::models::GalleryImage;
use crate::server::graphql::context::GraphQLContext;

pub async fn add_gallery_image(
    ctx: &GraphQLContext,
    image: String,
    caption: Option<String>,
    is_active: Option<bool>,
) -> FieldResult<GalleryImageData> {
    info!("add_gallery_image mutation called");

    let row = GalleryImage {
        id: Uuid::now_v7(),
        image,
        caption,
        is_active: is_active.unwrap_or(true),
    };

    let created = row.insert(&ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to add gallery image: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(GalleryImageData::from(created))
}

pub async fn update_gallery_image(
    ctx: &GraphQLContext,
    id: String,
    image: String,
    caption: Option<String>,
    is_active: bool,
) -> FieldResult<GalleryImageData> {
    info!(image_id = %id, "update_gallery_image mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid gallery image ID", juniper::Value::null()))?;

    let updated = GalleryImage::update(id, &image, caption.as_deref(), is_active, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update gallery image: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Gallery image not found", juniper::Value::null()))?;

    Ok(GalleryImageData::from(updated))
}

pub async fn delete_gallery_image(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(image_id = %id, "delete_gallery_image mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid gallery image ID", juniper::Value::null()))?;

    GalleryImage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete gallery image: {}", e),
            juniper::Value::null(),
        )
    })
}
