//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use server_core::common::AdminUser;
use server_core::domains::contact::models::{ContactMessage, MessageSubject};
use server_core::domains::events::models::{Event, EventImage};
use server_core::domains::gallery::models::GalleryImage;
use server_core::domains::members::models::{Member, SocietyDesignation};
use server_core::domains::updates::models::Update;
use sqlx::PgPool;
use uuid::Uuid;

/// Seed an admin user row. Admin identities are provisioned outside this
/// backend, so tests insert them directly.
pub async fn create_admin(pool: &PgPool, username: &str) -> Result<AdminUser> {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO admin_users (id, username) VALUES ($1, $2)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await?;

    let admin = AdminUser::find_by_id(id, pool)
        .await?
        .expect("admin user was just inserted");
    Ok(admin)
}

/// Create an event on the given date.
pub async fn create_event(
    pool: &PgPool,
    title: &str,
    event_date: NaiveDate,
    is_active: bool,
) -> Result<Event> {
    let event = Event {
        id: Uuid::now_v7(),
        title: title.to_string(),
        content: format!("{} details", title),
        event_date,
        event_location: "Community Hall".to_string(),
        event_image: None,
        long_description: None,
        is_active,
        last_updated: Utc::now(),
    };
    event.insert(pool).await
}

/// Attach an image to an event's gallery strip.
pub async fn create_event_image(
    pool: &PgPool,
    event_id: Uuid,
    image: &str,
    sort_order: i32,
) -> Result<EventImage> {
    let event_image = EventImage {
        id: Uuid::now_v7(),
        event_id,
        image: image.to_string(),
        caption: String::new(),
        sort_order,
    };
    event_image.insert(pool).await
}

/// Create a roster member with the given designation.
pub async fn create_member(
    pool: &PgPool,
    name: &str,
    email: &str,
    designation: SocietyDesignation,
    is_active: bool,
) -> Result<Member> {
    let member = Member {
        id: Uuid::now_v7(),
        title: format!("Member - {}", name),
        content: format!("{} profile", name),
        member_name: name.to_string(),
        member_position: "Member".to_string(),
        member_image: None,
        member_bio: None,
        email: email.to_string(),
        phone_number: None,
        date_of_joining: None,
        society_designation: designation.as_str().to_string(),
        is_active,
        last_updated: Utc::now(),
    };
    member.insert(pool).await
}

/// Add a photo to the society gallery.
pub async fn create_gallery_image(
    pool: &PgPool,
    image: &str,
    is_active: bool,
) -> Result<GalleryImage> {
    let gallery_image = GalleryImage {
        id: Uuid::now_v7(),
        image: image.to_string(),
        caption: None,
        is_active,
    };
    gallery_image.insert(pool).await
}

/// Post an announcement with the given priority.
pub async fn create_update(
    pool: &PgPool,
    title: &str,
    priority: i32,
    is_active: bool,
) -> Result<Update> {
    let update = Update {
        id: Uuid::now_v7(),
        title: title.to_string(),
        content: format!("{} body", title),
        is_active,
        priority,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    update.insert(pool).await
}

/// Create an unresolved contact message.
pub async fn create_message(
    pool: &PgPool,
    name: &str,
    subject: MessageSubject,
) -> Result<ContactMessage> {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    ContactMessage::insert(name, &email, subject, "Hello from the contact form", pool).await
}
