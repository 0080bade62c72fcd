use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Extra image attached to an event's gallery strip.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EventImage {
    pub id: Uuid,
    pub event_id: Uuid,
    pub image: String,
    pub caption: String,
    pub sort_order: i32,
}

impl EventImage {
    /// Fails with a foreign key violation when the event does not exist.
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO event_images (id, event_id, image, caption, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(self.event_id)
        .bind(&self.image)
        .bind(&self.caption)
        .bind(self.sort_order)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(
        id: Uuid,
        image: &str,
        caption: &str,
        sort_order: i32,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE event_images
            SET image = $2, caption = $3, sort_order = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(image)
        .bind(caption)
        .bind(sort_order)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM event_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Display order: explicit `sort_order`, then insertion order.
    pub async fn find_for_event(event_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM event_images WHERE event_id = $1 ORDER BY sort_order, id",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
