use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Society event - SQL persistence layer.
///
/// Events carry a calendar date rather than a timestamp; every listing is
/// ordered newest event first. Publication is a plain `is_active` flag, and
/// all visitor-facing reads filter on it.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub event_date: NaiveDate,
    pub event_location: String,
    pub event_image: Option<String>,
    pub long_description: Option<String>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl Event {
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO events (
                id, title, content, event_date, event_location,
                event_image, long_description, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(self.event_date)
        .bind(&self.event_location)
        .bind(&self.event_image)
        .bind(&self.long_description)
        .bind(self.is_active)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE events
            SET title = $2, content = $3, event_date = $4, event_location = $5,
                event_image = $6, long_description = $7, is_active = $8,
                last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(self.event_date)
        .bind(&self.event_location)
        .bind(&self.event_image)
        .bind(&self.long_description)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Published events, newest event date first.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE is_active = true ORDER BY event_date DESC, id DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// The home page strip: most recent published events, capped.
    pub async fn find_latest(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM events
            WHERE is_active = true
            ORDER BY event_date DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
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
            SELECT * FROM events
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::text IS NULL
                   OR title ILIKE '%' || $2 || '%'
                   OR content ILIKE '%' || $2 || '%'
                   OR event_location ILIKE '%' || $2 || '%'
                   OR long_description ILIKE '%' || $2 || '%')
            ORDER BY event_date DESC, id DESC
            "#,
        )
        .bind(active)
        .bind(search)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Attached gallery rows go with it via `ON DELETE CASCADE`.
    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
