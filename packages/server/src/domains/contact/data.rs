use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::common::PageInfo;
use crate::domains::contact::models::{ContactMessage, ContactPage, MessageSubject};

/// GraphQL mirror of the stored subject key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[graphql(description = "Topic of a contact message")]
pub enum MessageSubjectData {
    General,
    Membership,
    Events,
    Feedback,
}

impl From<MessageSubject> for MessageSubjectData {
    fn from(subject: MessageSubject) -> Self {
        match subject {
            MessageSubject::General => MessageSubjectData::General,
            MessageSubject::Membership => MessageSubjectData::Membership,
            MessageSubject::Events => MessageSubjectData::Events,
            MessageSubject::Feedback => MessageSubjectData::Feedback,
        }
    }
}

impl From<MessageSubjectData> for MessageSubject {
    fn from(subject: MessageSubjectData) -> Self {
        match subject {
            MessageSubjectData::General => MessageSubject::General,
            MessageSubjectData::Membership => MessageSubject::Membership,
            MessageSubjectData::Events => MessageSubject::Events,
            MessageSubjectData::Feedback => MessageSubject::Feedback,
        }
    }
}

/// Contact page GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Contact details shown in the footer and contact page")]
pub struct ContactPageData {
    /// Unique identifier
    pub id: String,

    /// Postal address
    pub address: String,

    /// Contact phone number
    pub phone: String,

    /// Contact email address
    pub email: String,

    /// Admin-facing flag; public reads ignore it
    pub is_active: bool,
}

impl From<ContactPage> for ContactPageData {
    fn from(page: ContactPage) -> Self {
        Self {
            id: page.id.to_string(),
            address: page.address,
            phone: page.phone,
            email: page.email,
            is_active: page.is_active,
        }
    }
}

/// Contact message GraphQL data type
///
/// Inbox representation of a visitor message (for GraphQL responses)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A message sent through the public contact form")]
pub struct ContactMessageData {
    /// Unique identifier
    pub id: String,

    /// Sender's name
    pub name: String,

    /// Sender's email address
    pub email: String,

    /// Topic the sender picked
    pub subject: MessageSubjectData,

    /// Human-readable topic for the inbox listing
    pub subject_display: String,

    /// Message body
    pub message: String,

    /// Whether an admin has dealt with this message
    pub is_resolved: bool,

    /// When the message arrived
    pub created_at: DateTime<Utc>,

    /// When it was resolved, if it has been
    pub resolved_at: Option<DateTime<Utc>>,

    /// Admin identity that resolved it, if any
    pub resolved_by: Option<String>,

    /// Admin notes about the resolution
    pub notes: String,
}

impl From<ContactMessage> for ContactMessageData {
    fn from(message: ContactMessage) -> Self {
        // Unknown stored keys read as general inquiries.
        let subject = message
            .subject
            .parse::<MessageSubject>()
            .unwrap_or(MessageSubject::General);

        Self {
            id: message.id.to_string(),
            name: message.name,
            email: message.email,
            subject: subject.into(),
            subject_display: subject.label().to_string(),
            message: message.message,
            is_resolved: message.is_resolved,
            created_at: message.created_at,
            resolved_at: message.resolved_at,
            resolved_by: message.resolved_by.map(|id| id.to_string()),
            notes: message.notes,
        }
    }
}

/// One inbox page plus the cursor to ask for the next.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Paginated contact message listing")]
pub struct ContactMessageConnection {
    pub nodes: Vec<ContactMessageData>,
    pub page_info: PageInfo,
}
