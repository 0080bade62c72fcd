use chrono::{DateTime, NaiveDate, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::events::models::{Event, EventImage};

/// Event gallery image GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Additional image attached to an event")]
pub struct EventImageData {
    /// Unique identifier
    pub id: String,

    /// Owning event
    pub event_id: String,

    /// Image URL
    pub image: String,

    /// Caption shown under the image
    pub caption: String,

    /// Position within the event's gallery strip
    pub sort_order: i32,
}

impl From<EventImage> for EventImageData {
    fn from(image: EventImage) -> Self {
        Self {
            id: image.id.to_string(),
            event_id: image.event_id.to_string(),
            image: image.image,
            caption: image.caption,
            sort_order: image.sort_order,
        }
    }
}

/// Event GraphQL data type
///
/// Public API representation of an event (for GraphQL responses)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A society event with its gallery strip")]
pub struct EventData {
    /// Unique identifier
    pub id: String,

    /// Event title
    pub title: String,

    /// Short body text shown in listings
    pub content: String,

    /// Calendar date of the event
    pub event_date: NaiveDate,

    /// Where the event takes place
    pub event_location: String,

    /// Cover image URL, if one is set
    pub event_image: Option<String>,

    /// Full write-up for the detail page
    pub long_description: Option<String>,

    /// Whether visitors can see this event
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,

    /// Gallery strip, ordered by sort order
    pub images: Vec<EventImageData>,
}

impl EventData {
    pub fn from_parts(event: Event, images: Vec<EventImage>) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            content: event.content,
            event_date: event.event_date,
            event_location: event.event_location,
            event_image: event.event_image,
            long_description: event.long_description,
            is_active: event.is_active,
            last_updated: event.last_updated,
            images: images.into_iter().map(EventImageData::from).collect(),
        }
    }
}

/// Admin listings skip the gallery strip; use `from_parts` where it matters.
impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        Self::from_parts(event, Vec::new())
    }
}
