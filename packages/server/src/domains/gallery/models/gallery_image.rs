use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Standalone photo gallery entry. Listings run newest first: ids are
/// time-ordered, so `id DESC` is upload order reversed.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct GalleryImage {
    pub id: Uuid,
    pub image: String,
    pub caption: Option<String>,
    pub is_active: bool,
}

impl GalleryImage {
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO gallery_images (id, image, caption, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.image)
        .bind(&self.caption)
        .bind(self.is_active)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(
        id: Uuid,
        image: &str,
        caption: Option<&str>,
        is_active: bool,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE gallery_images
            SET image = $2, caption = $3, is_active = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(image)
        .bind(caption)
        .bind(is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM gallery_images WHERE is_active = true ORDER BY id DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Admin listing with optional publication filter and caption search.
    pub async fn admin_search(
        active: Option<bool>,
        search: Option<&str>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM gallery_images
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::text IS NULL OR caption ILIKE '%' || $2 || '%')
            ORDER BY id DESC
            "#,
        )
        .bind(active)
        .bind(search)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
