use chrono::{NaiveDate, Utc};
use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::common::is_unique_violation;
use crate::domains::members::data::{MemberData, SocietyDesignationData};
use crate::domains::members::models::{Member, SocietyDesignation};
use crate::server::graphql::context::GraphQLContext;

fn duplicate_email_error(e: anyhow::Error, context: &str) -> FieldError {
    if is_unique_violation(&e, "members_email_key") {
        FieldError::new(
            "This email is already registered to another member",
            juniper::Value::null(),
        )
    } else {
        FieldError::new(format!("{}: {}", context, e), juniper::Value::null())
    }
}

/// Admin roster entry. Unlike the public application intake, rows created
/// here default to active.
#[allow(clippy::too_many_arguments)]
pub async fn create_member(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    member_name: String,
    member_position: String,
    email: String,
    member_image: Option<String>,
    member_bio: Option<String>,
    phone_number: Option<String>,
    date_of_joining: Option<NaiveDate>,
    society_designation: Option<SocietyDesignationData>,
    is_active: Option<bool>,
) -> FieldResult<MemberData> {
    info!(member_name = %member_name, "create_member mutation called");

    let designation: SocietyDesignation = society_designation
        .unwrap_or(SocietyDesignationData::GeneralMember)
        .into();

    let member = Member {
        id: Uuid::now_v7(),
        title,
        content,
        member_name,
        member_position,
        member_image,
        member_bio,
        email,
        phone_number,
        date_of_joining,
        society_designation: designation.as_str().to_string(),
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = member
        .insert(&ctx.db_pool)
        .await
        .map_err(|e| duplicate_email_error(e, "Failed to create member"))?;

    Ok(MemberData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_member(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    member_name: String,
    member_position: String,
    email: String,
    member_image: Option<String>,
    member_bio: Option<String>,
    phone_number: Option<String>,
    date_of_joining: Option<NaiveDate>,
    society_designation: SocietyDesignationData,
    is_active: bool,
) -> FieldResult<MemberData> {
    info!(member_id = %id, "update_member mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid member ID", juniper::Value::null()))?;

    let designation: SocietyDesignation = society_designation.into();

    let member = Member {
        id,
        title,
        content,
        member_name,
        member_position,
        member_image,
        member_bio,
        email,
        phone_number,
        date_of_joining,
        society_designation: designation.as_str().to_string(),
        is_active,
        last_updated: Utc::now(),
    };

    let updated = member
        .save(&ctx.db_pool)
        .await
        .map_err(|e| duplicate_email_error(e, "Failed to update member"))?
        .ok_or_else(|| FieldError::new("Member not found", juniper::Value::null()))?;

    Ok(MemberData::from(updated))
}

/// Approve an application or retire a member without editing the profile.
pub async fn set_member_active(
    ctx: &GraphQLContext,
    id: String,
    active: bool,
) -> FieldResult<MemberData> {
    info!(member_id = %id, active = active, "set_member_active mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid member ID", juniper::Value::null()))?;

    let updated = Member::set_active(id, active, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update member: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Member not found", juniper::Value::null()))?;

    Ok(MemberData::from(updated))
}

pub async fn delete_member(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(member_id = %id, "delete_member mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid member ID", juniper::Value::null()))?;

    Member::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete member: {}", e),
            juniper::Value::null(),
        )
    })
}
