use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// About page content. Singleton, same slot discipline as the home page.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AboutPage {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mission: String,
    pub vision: String,
    pub team_image: Option<String>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl AboutPage {
    pub async fn insert_if_absent(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO about_page (id, title, content, mission, vision, team_image, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.mission)
        .bind(&self.vision)
        .bind(&self.team_image)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE about_page
            SET title = $2, content = $3, mission = $4, vision = $5,
                team_image = $6, is_active = $7, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.mission)
        .bind(&self.vision)
        .bind(&self.team_image)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_first_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM about_page WHERE is_active = true ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM about_page ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn can_create(pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT NOT EXISTS (SELECT 1 FROM about_page)")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM about_page WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
