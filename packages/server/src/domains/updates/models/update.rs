use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Announcement ticker entry. The feed sorts by priority first (higher
/// numbers pin to the top), then recency.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Update {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Update {
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO updates (id, title, content, is_active, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(self.is_active)
        .bind(self.priority)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE updates
            SET title = $2, content = $3, is_active = $4, priority = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(self.is_active)
        .bind(self.priority)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM updates WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// The public feed: published entries, pinned-first then newest.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM updates
            WHERE is_active = true
            ORDER BY priority DESC, created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Admin listing with optional publication filter and text search.
    pub async fn admin_search(
        active: Option<bool>,
        search: Option<&str>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM updates
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::text IS NULL
                   OR title ILIKE '%' || $2 || '%'
                   OR content ILIKE '%' || $2 || '%')
            ORDER BY priority DESC, created_at DESC
            "#,
        )
        .bind(active)
        .bind(search)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM updates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
