use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// President's message block. Singleton.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct PresidentMessage {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub president_name: String,
    pub president_image: Option<String>,
    pub designation: String,
    pub message: Option<String>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl PresidentMessage {
    pub async fn insert_if_absent(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO president_message (
                id, title, content, president_name, president_image,
                designation, message, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.president_name)
        .bind(&self.president_image)
        .bind(&self.designation)
        .bind(&self.message)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE president_message
            SET title = $2, content = $3, president_name = $4, president_image = $5,
                designation = $6, message = $7, is_active = $8, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.president_name)
        .bind(&self.president_image)
        .bind(&self.designation)
        .bind(&self.message)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_first_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM president_message WHERE is_active = true ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM president_message ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn can_create(pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT NOT EXISTS (SELECT 1 FROM president_message)")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM president_message WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
