use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::pages::models::{AboutPage, HomePage, JoinPage, PresidentMessage};

/// Home page GraphQL data type
///
/// Public API representation of the landing page (for GraphQL responses)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Landing page content")]
pub struct HomePageData {
    /// Unique identifier
    pub id: String,

    /// Heading shown in admin listings
    pub title: String,

    /// Main body text
    pub content: String,

    /// Site name shown in the masthead
    pub name: String,

    /// Short site description
    pub description: String,

    /// Hero banner headline
    pub hero_title: String,

    /// Hero banner subheadline
    pub hero_subtitle: String,

    /// Hero image URL, if one is set
    pub featured_image: Option<String>,

    /// Whether visitors can see this page
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<HomePage> for HomePageData {
    fn from(page: HomePage) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title,
            content: page.content,
            name: page.name,
            description: page.description,
            hero_title: page.hero_title,
            hero_subtitle: page.hero_subtitle,
            featured_image: page.featured_image,
            is_active: page.is_active,
            last_updated: page.last_updated,
        }
    }
}

/// About page GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "About page content")]
pub struct AboutPageData {
    /// Unique identifier
    pub id: String,

    /// Heading shown in admin listings
    pub title: String,

    /// Main body text
    pub content: String,

    /// Mission statement
    pub mission: String,

    /// Vision statement
    pub vision: String,

    /// Team photo URL, if one is set
    pub team_image: Option<String>,

    /// Whether visitors can see this page
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<AboutPage> for AboutPageData {
    fn from(page: AboutPage) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title,
            content: page.content,
            mission: page.mission,
            vision: page.vision,
            team_image: page.team_image,
            is_active: page.is_active,
            last_updated: page.last_updated,
        }
    }
}

/// Join page GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Membership page content")]
pub struct JoinPageData {
    /// Unique identifier
    pub id: String,

    /// Heading shown in admin listings
    pub title: String,

    /// Main body text
    pub content: String,

    /// Membership benefits copy
    pub benefits: String,

    /// Membership requirements copy
    pub requirements: String,

    /// Embed markup for the hosted application form
    pub application_form_embed: String,

    /// Whether visitors can see this page
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<JoinPage> for JoinPageData {
    fn from(page: JoinPage) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title,
            content: page.content,
            benefits: page.benefits,
            requirements: page.requirements,
            application_form_embed: page.application_form_embed,
            is_active: page.is_active,
            last_updated: page.last_updated,
        }
    }
}

/// President's message GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Message from the society president")]
pub struct PresidentMessageData {
    /// Unique identifier
    pub id: String,

    /// Heading shown in admin listings
    pub title: String,

    /// Main body text
    pub content: String,

    /// President's display name
    pub president_name: String,

    /// Portrait URL, if one is set
    pub president_image: Option<String>,

    /// Title shown under the name, e.g. "President"
    pub designation: String,

    /// Optional pull quote
    pub message: Option<String>,

    /// Whether visitors can see this block
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<PresidentMessage> for PresidentMessageData {
    fn from(page: PresidentMessage) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title,
            content: page.content,
            president_name: page.president_name,
            president_image: page.president_image,
            designation: page.designation,
            message: page.message,
            is_active: page.is_active,
            last_updated: page.last_updated,
        }
    }
}

/// Singleton slot availability for the admin UI. The unique indexes are the
/// real guard; this only drives whether an "add" button is shown.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Which single-row content slots are still unclaimed")]
pub struct CanCreate {
    pub home_page: bool,
    pub about_page: bool,
    pub join_page: bool,
    pub president_message: bool,
}
