use juniper::{FieldError, FieldResult};
use uuid::Uuid;

use crate::domains::events::data::{EventData, EventImageData};
use crate::domains::events::models::{Event, EventImage};
use crate::server::graphql::context::GraphQLContext;

/// Default size of the home page event strip.
pub const LATEST_EVENTS_DEFAULT: i32 = 5;

async fn with_images(event: Event, ctx: &GraphQLContext) -> FieldResult<EventData> {
    let images = EventImage::find_for_event(event.id, &ctx.db_pool).await?;
    Ok(EventData::from_parts(event, images))
}

/// All published events, newest first, galleries included.
pub async fn events(ctx: &GraphQLContext) -> FieldResult<Vec<EventData>> {
    let rows = Event::find_active(&ctx.db_pool).await?;

    let mut out = Vec::with_capacity(rows.len());
    for event in rows {
        out.push(with_images(event, ctx).await?);
    }
    Ok(out)
}

/// Single event detail. `None` for unknown ids; unpublished events stay
/// reachable here so the admin preview can render them.
pub async fn event(ctx: &GraphQLContext, id: String) -> FieldResult<Option<EventData>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid event ID", juniper::Value::null()))?;

    match Event::find_by_id(id, &ctx.db_pool).await? {
        Some(event) => Ok(Some(with_images(event, ctx).await?)),
        None => Ok(None),
    }
}

/// The home page strip: most recent published events.
pub async fn latest_events(ctx: &GraphQLContext, limit: Option<i32>) -> FieldResult<Vec<EventData>> {
    let limit = limit.unwrap_or(LATEST_EVENTS_DEFAULT);
    if limit <= 0 {
        return Err(FieldError::new(
            "limit must be positive",
            juniper::Value::null(),
        ));
    }

    let rows = Event::find_latest(i64::from(limit), &ctx.db_pool).await?;

    let mut out = Vec::with_capacity(rows.len());
    for event in rows {
        out.push(with_images(event, ctx).await?);
    }
    Ok(out)
}

/// Admin listing with optional publication filter and text search.
pub async fn all_events(
    ctx: &GraphQLContext,
    active: Option<bool>,
    search: Option<String>,
) -> FieldResult<Vec<EventData>> {
    let rows = Event::admin_search(active, search.as_deref(), &ctx.db_pool).await?;
    Ok(rows.into_iter().map(EventData::from).collect())
}

/// Gallery strip for one event, in display order.
pub async fn event_images(ctx: &GraphQLContext, event_id: String) -> FieldResult<Vec<EventImageData>> {
    let event_id = Uuid::parse_str(&event_id)
        .map_err(|_| FieldError::new("Invalid event ID", juniper::Value::null()))?;

    let rows = EventImage::find_for_event(event_id, &ctx.db_pool).await?;
    Ok(rows.into_iter().map(EventImageData::from).collect())
}
