use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Join page content. Singleton.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct JoinPage {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub benefits: String,
    pub requirements: String,
    pub application_form_embed: String,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl JoinPage {
    pub async fn insert_if_absent(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO join_page (
                id, title, content, benefits, requirements,
                application_form_embed, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.benefits)
        .bind(&self.requirements)
        .bind(&self.application_form_embed)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE join_page
            SET title = $2, content = $3, benefits = $4, requirements = $5,
                application_form_embed = $6, is_active = $7, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.benefits)
        .bind(&self.requirements)
        .bind(&self.application_form_embed)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_first_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM join_page WHERE is_active = true ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM join_page ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn can_create(pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT NOT EXISTS (SELECT 1 FROM join_page)")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM join_page WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
