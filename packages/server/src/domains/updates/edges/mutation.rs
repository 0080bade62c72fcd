use chrono::Utc;
use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::domains::updates::data::UpdateData;
use crate::domains::updates::models::Update;
use crate::server::graphql::context::GraphQLContext;

pub async fn create_update(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    priority: Option<i32>,
    is_active: Option<bool>,
) -> FieldResult<UpdateData> {
    info!(title = %title, "create_update mutation called");

    let now = Utc::now();
    let update = Update {
        id: Uuid::now_v7(),
        title,
        content,
        is_active: is_active.unwrap_or(true),
        priority: priority.unwrap_or(0),
        created_at: now,
        updated_at: now,
    };

    let created = update.insert(&ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to create update: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(UpdateData::from(created))
}

pub async fn update_update(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    priority: i32,
    is_active: bool,
) -> FieldResult<UpdateData> {
    info!(update_id = %id, "update_update mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid update ID", juniper::Value::null()))?;

    // `save` leaves created_at alone; the value here is never written.
    let now = Utc::now();
    let update = Update {
        id,
        title,
        content,
        is_active,
        priority,
        created_at: now,
        updated_at: now,
    };

    let updated = update
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update announcement: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Update not found", juniper::Value::null()))?;

    Ok(UpdateData::from(updated))
}

pub async fn delete_update(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(update_id = %id, "delete_update mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid update ID", juniper::Value::null()))?;

    Update::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete update: {}", e),
            juniper::Value::null(),
        )
    })
}
