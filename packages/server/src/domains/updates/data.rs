use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::updates::models::Update;

/// Update GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A society announcement")]
pub struct UpdateData {
    /// Unique identifier
    pub id: String,

    /// Announcement title
    pub title: String,

    /// Announcement body
    pub content: String,

    /// Whether visitors can see this announcement
    pub is_active: bool,

    /// Higher numbers pin the announcement above newer ones
    pub priority: i32,

    /// When the announcement was posted
    pub created_at: DateTime<Utc>,

    /// Last edit timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Update> for UpdateData {
    fn from(update: Update) -> Self {
        Self {
            id: update.id.to_string(),
            title: update.title,
            content: update.content,
            is_active: update.is_active,
            priority: update.priority,
            created_at: update.created_at,
            updated_at: update.updated_at,
        }
    }
}
