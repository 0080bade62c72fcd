use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// An administrator identity from the platform's user system.
///
/// This backend never creates or removes these rows; it resolves the
/// `x-admin-user` header against them and records them in resolution
/// audit fields (`contact_messages.resolved_by`).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// Look up an identity by id.
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM admin_users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
