use chrono::{NaiveDate, Utc};
use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::domains::events::data::{EventData, EventImageData};
use crate::domains::events::models::{Event, EventImage};
use crate::server::graphql::context::GraphQLContext;

#[allow(clippy::too_many_arguments)]
pub async fn create_event(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    event_date: NaiveDate,
    event_location: String,
    event_image: Option<String>,
    long_description: Option<String>,
    is_active: Option<bool>,
) -> FieldResult<EventData> {
    info!(title = %title, "create_event mutation called");

    let event = Event {
        id: Uuid::now_v7(),
        title,
        content,
        event_date,
        event_location,
        event_image,
        long_description,
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = event.insert(&ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to create event: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(EventData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_event(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    event_date: NaiveDate,
    event_location: String,
    event_image: Option<String>,
    long_description: Option<String>,
    is_active: bool,
) -> FieldResult<EventData> {
    info!(event_id = %id, "update_event mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid event ID", juniper::Value::null()))?;

    let event = Event {
        id,
        title,
        content,
        event_date,
        event_location,
        event_image,
        long_description,
        is_active,
        last_updated: Utc::now(),
    };

    let updated = event
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update event: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Event not found", juniper::Value::null()))?;

    Ok(EventData::from(updated))
}

/// Removes the event and, via cascade, its gallery strip.
pub async fn delete_event(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(event_id = %id, "delete_event mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid event ID", juniper::Value::null()))?;

    Event::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete event: {}", e),
            juniper::Value::null(),
        )
    })
}

pub async fn add_event_image(
    ctx: &GraphQLContext,
    event_id: String,
    image: String,
    caption: Option<String>,
    sort_order: Option<i32>,
) -> FieldResult<EventImageData> {
    info!(event_id = %event_id, "add_event_image mutation called");

    let event_id = Uuid::parse_str(&event_id)
        .map_err(|_| FieldError::new("Invalid event ID", juniper::Value::null()))?;

    // Clearer error than the raw FK violation.
    if Event::find_by_id(event_id, &ctx.db_pool).await?.is_none() {
        return Err(FieldError::new("Event not found", juniper::Value::null()));
    }

    let row = EventImage {
        id: Uuid::now_v7(),
        event_id,
        image,
        caption: caption.unwrap_or_default(),
        sort_order: sort_order.unwrap_or(0),
    };

    let created = row.insert(&ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to add event image: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(EventImageData::from(created))
}

pub async fn update_event_image(
    ctx: &GraphQLContext,
    id: String,
    image: String,
    caption: String,
    sort_order: i32,
) -> FieldResult<EventImageData> {
    info!(image_id = %id, "update_event_image mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid event image ID", juniper::Value::null()))?;

    let updated = EventImage::update(id, &image, &caption, sort_order, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update event image: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Event image not found", juniper::Value::null()))?;

    Ok(EventImageData::from(updated))
}

pub async fn delete_event_image(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(image_id = %id, "delete_event_image mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid event image ID", juniper::Value::null()))?;

    EventImage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete event image: {}", e),
            juniper::Value::null(),
        )
    })
}
