use chrono::Utc;
use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::domains::pages::data::{
    AboutPageData, HomePageData, JoinPageData, PresidentMessageData,
};
use crate::domains::pages::models::{AboutPage, HomePage, JoinPage, PresidentMessage};
use crate::server::graphql::context::GraphQLContext;

/// Claim the home page slot. Loses cleanly if a page already exists.
#[allow(clippy::too_many_arguments)]
pub async fn create_home_page(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    name: String,
    description: String,
    hero_title: String,
    hero_subtitle: String,
    featured_image: Option<String>,
    is_active: Option<bool>,
) -> FieldResult<HomePageData> {
    info!("create_home_page mutation called");

    let page = HomePage {
        id: Uuid::now_v7(),
        title,
        content,
        name,
        description,
        hero_title,
        hero_subtitle,
        featured_image,
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = page
        .insert_if_absent(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to create home page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Home page already exists", juniper::Value::null()))?;

    Ok(HomePageData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_home_page(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    name: String,
    description: String,
    hero_title: String,
    hero_subtitle: String,
    featured_image: Option<String>,
    is_active: bool,
) -> FieldResult<HomePageData> {
    info!(page_id = %id, "update_home_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid home page ID", juniper::Value::null()))?;

    let page = HomePage {
        id,
        title,
        content,
        name,
        description,
        hero_title,
        hero_subtitle,
        featured_image,
        is_active,
        last_updated: Utc::now(),
    };

    let updated = page
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update home page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Home page not found", juniper::Value::null()))?;

    Ok(HomePageData::from(updated))
}

pub async fn delete_home_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(page_id = %id, "delete_home_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid home page ID", juniper::Value::null()))?;

    HomePage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete home page: {}", e),
            juniper::Value::null(),
        )
    })
}

pub async fn create_about_page(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    mission: String,
    vision: String,
    team_image: Option<String>,
    is_active: Option<bool>,
) -> FieldResult<AboutPageData> {
    info!("create_about_page mutation called");

    let page = AboutPage {
        id: Uuid::now_v7(),
        title,
        content,
        mission,
        vision,
        team_image,
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = page
        .insert_if_absent(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to create about page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("About page already exists", juniper::Value::null()))?;

    Ok(AboutPageData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_about_page(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    mission: String,
    vision: String,
    team_image: Option<String>,
    is_active: bool,
) -> FieldResult<AboutPageData> {
    info!(page_id = %id, "update_about_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid about page ID", juniper::Value::null()))?;

    let page = AboutPage {
        id,
        title,
        content,
        mission,
        vision,
        team_image,
        is_active,
        last_updated: Utc::now(),
    };

    let updated = page
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update about page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("About page not found", juniper::Value::null()))?;

    Ok(AboutPageData::from(updated))
}

pub async fn delete_about_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(page_id = %id, "delete_about_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid about page ID", juniper::Value::null()))?;

    AboutPage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete about page: {}", e),
            juniper::Value::null(),
        )
    })
}

pub async fn create_join_page(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    benefits: String,
    requirements: String,
    application_form_embed: String,
    is_active: Option<bool>,
) -> FieldResult<JoinPageData> {
    info!("create_join_page mutation called");

    let page = JoinPage {
        id: Uuid::now_v7(),
        title,
        content,
        benefits,
        requirements,
        application_form_embed,
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = page
        .insert_if_absent(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to create join page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Join page already exists", juniper::Value::null()))?;

    Ok(JoinPageData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_join_page(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    benefits: String,
    requirements: String,
    application_form_embed: String,
    is_active: bool,
) -> FieldResult<JoinPageData> {
    info!(page_id = %id, "update_join_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid join page ID", juniper::Value::null()))?;

    let page = JoinPage {
        id,
        title,
        content,
        benefits,
        requirements,
        application_form_embed,
        is_active,
        last_updated: Utc::now(),
    };

    let updated = page
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update join page: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("Join page not found", juniper::Value::null()))?;

    Ok(JoinPageData::from(updated))
}

pub async fn delete_join_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(page_id = %id, "delete_join_page mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid join page ID", juniper::Value::null()))?;

    JoinPage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete join page: {}", e),
            juniper::Value::null(),
        )
    })
}

#[allow(clippy::too_many_arguments)]
pub async fn create_president_message(
    ctx: &GraphQLContext,
    title: String,
    content: String,
    president_name: String,
    president_image: Option<String>,
    designation: String,
    message: Option<String>,
    is_active: Option<bool>,
) -> FieldResult<PresidentMessageData> {
    info!("create_president_message mutation called");

    let page = PresidentMessage {
        id: Uuid::now_v7(),
        title,
        content,
        president_name,
        president_image,
        designation,
        message,
        is_active: is_active.unwrap_or(true),
        last_updated: Utc::now(),
    };

    let created = page
        .insert_if_absent(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to create president message: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| {
            FieldError::new("President message already exists", juniper::Value::null())
        })?;

    Ok(PresidentMessageData::from(created))
}

#[allow(clippy::too_many_arguments)]
pub async fn update_president_message(
    ctx: &GraphQLContext,
    id: String,
    title: String,
    content: String,
    president_name: String,
    president_image: Option<String>,
    designation: String,
    message: Option<String>,
    is_active: bool,
) -> FieldResult<PresidentMessageData> {
    info!(page_id = %id, "update_president_message mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid president message ID", juniper::Value::null()))?;

    let page = PresidentMessage {
        id,
        title,
        content,
        president_name,
        president_image,
        designation,
        message,
        is_active,
        last_updated: Utc::now(),
    };

    let updated = page
        .save(&ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to update president message: {}", e),
                juniper::Value::null(),
            )
        })?
        .ok_or_else(|| FieldError::new("President message not found", juniper::Value::null()))?;

    Ok(PresidentMessageData::from(updated))
}

pub async fn delete_president_message(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
    info!(page_id = %id, "delete_president_message mutation called");

    let id = Uuid::parse_str(&id)
        .map_err(|_| FieldError::new("Invalid president message ID", juniper::Value::null()))?;

    PresidentMessage::delete(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to delete president message: {}", e),
            juniper::Value::null(),
        )
    })
}
