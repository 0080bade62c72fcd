use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Home page content - SQL persistence layer.
///
/// The home page is a singleton: a unique index over a constant expression
/// caps the table at one row, so claiming the slot is a single atomic
/// `INSERT ... ON CONFLICT DO NOTHING` with no check-then-act window.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct HomePage {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub name: String,
    pub description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub featured_image: Option<String>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl HomePage {
    /// Claims the singleton slot. Returns `None` when a row already exists,
    /// including when a concurrent insert wins the race.
    pub async fn insert_if_absent(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO home_page (
                id, title, content, name, description,
                hero_title, hero_subtitle, featured_image, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.name)
        .bind(&self.description)
        .bind(&self.hero_title)
        .bind(&self.hero_subtitle)
        .bind(&self.featured_image)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Overwrites every editable field and bumps `last_updated`.
    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE home_page
            SET title = $2, content = $3, name = $4, description = $5,
                hero_title = $6, hero_subtitle = $7, featured_image = $8,
                is_active = $9, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.name)
        .bind(&self.description)
        .bind(&self.hero_title)
        .bind(&self.hero_subtitle)
        .bind(&self.featured_image)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// The row visitors see. `None` when the page is missing or unpublished.
    pub async fn find_first_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM home_page WHERE is_active = true ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Admin listing. At most one row, but returned as a list so an
    /// inactive page still shows up.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM home_page ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Advisory check for the admin UI; the unique index is the actual guard.
    pub async fn can_create(pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT NOT EXISTS (SELECT 1 FROM home_page)")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM home_page WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
