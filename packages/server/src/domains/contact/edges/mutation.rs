use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::domains::contact::actions;
use crate::domains::contact::data::{ContactMessageData, ContactPageData};
use crate::domains::contact::models::{ContactMessage, ContactPage};
use crate::server::graphql::context::GraphQLContext;

fn parse_ids(ids: &[String]) -> FieldResult<Vec<Uuid>> {
    ids.iter()
        .map(|id| {
            Uuid::parse_str(id).map_err(|_| {
                FieldError::new(
                    format!("Invalid contact message ID: {}", id),
                    juniper::Value::null(),
                )
            })
        })
        .collect()
}

/// Overwrite the footer contact details, creating the row on first use.
pub async fn set_contact_page(
    ctx: &GraphQLContext,
    address: String,
    phone: String,
    email: String,
    is_active: Option<bool>,
) -> FieldResult<ContactPageData> {
    info!("set_contact_page mutation called");

    let page = ContactPage::set(
        &address,
        &phone,
        &email,
        is_active.unwrap_or(true),
        &ctx.db_pool,
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to set contact page: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(ContactPageData::from(page))
}

pub async fn delete_contact_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(page_id = %id, "delete_contact_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid contact page ID", juniper::Value::null()))?;

    ContactPage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete contact page: {}", e),
            juniper::Value::null(),
        )
    })
}

/// Bulk-resolve inbox messages. Returns how many rows actually flipped;
/// already-resolved picks do not inflate the count.
pub async fn resolve_contact_messages(
    ctx: &GraphQLContext,
    ids: Vec<String>,
    notes: Option<String>,
) -> FieldResult<i32> {
    info!(count = ids.len(), "resolve_contact_messages mutation called");

    // Resolution stamps the acting admin; refuse to guess one.
    let admin = ctx
        .acting_admin
        .as_ref()
        .ok_or_else(|| FieldError::new("Admin identity required", juniper::Value::null()))?;

    let ids = parse_ids(&ids)?;
    let count = actions::resolve_messages(
        &ids,
        admin.id,
        notes.as_deref().unwrap_or(""),
        &ctx.db_pool,
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to resolve messages: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(count as i32)
}

/// Bulk-reopen inbox messages. Returns how many rows actually flipped.
pub async fn unresolve_contact_messages(
    ctx: &GraphQLContext,
    ids: Vec<String>,
) -> FieldResult<i32> {
    info!(count = ids.len(), "unresolve_contact_messages mutation called");

    let ids = parse_ids(&ids)?;
    let count = actions::unresolve_messages(&ids, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to unresolve messages: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(count as i32)
}

/// Inbox detail edit: resolved flag plus notes, with the audit pair derived
/// rather than client-supplied.
pub async fn admin_update_contact_message(
    ctx: &GraphQLContext,
    id: String,
    is_resolved: bool,
    notes: String,
) -> FieldResult<ContactMessageData> {
    info!(message_id = %id, "admin_update_contact_message mutation called");

    let admin = ctx
        .acting_admin
        .as_ref()
        .ok_or_else(|| FieldError::new("Admin identity required", juniper::Value::null()))?;

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid contact message ID", juniper::Value::null()))?;

    let updated = ContactMessage::admin_update(id, is_resolved, &notes, admin.id, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update message: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Contact message not found", juniper::Value::null()))?;

    Ok(ContactMessageData::from(updated))
}

pub async fn delete_contact_message(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(message_id = %id, "delete_contact_message mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid contact message ID", juniper::Value::null()))?;

    ContactMessage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete message: {}", e),
            juniper::Value::null(),
        )
    })
}
