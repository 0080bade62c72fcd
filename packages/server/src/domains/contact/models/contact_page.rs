use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Contact details shown in the site footer and on the contact page.
///
/// Not singleton-enforced; readers take the first row and `set` edits it in
/// place, so extra rows are inert rather than forbidden.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ContactPage {
    pub id: Uuid,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
}

impl ContactPage {
    /// The row every public page reads. Intentionally unfiltered by
    /// `is_active`; the flag only matters to the admin listing.
    pub async fn find_first(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM contact_page ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM contact_page ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Upsert-in-spirit: overwrite the first row, or insert one if the table
    /// is empty.
    pub async fn set(
        address: &str,
        phone: &str,
        email: &str,
        is_active: bool,
        pool: &PgPool,
    ) -> Result<Self> {
        let updated = sqlx::query_as::<_, Self>(
            r#"
            UPDATE contact_page
            SET address = $1, phone = $2, email = $3, is_active = $4
            WHERE id = (SELECT id FROM contact_page ORDER BY id LIMIT 1)
            RETURNING *
            "#,
        )
        .bind(address)
        .bind(phone)
        .bind(email)
        .bind(is_active)
        .fetch_optional(pool)
        .await?;

        if let Some(row) = updated {
            return Ok(row);
        }

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO contact_page (id, address, phone, email, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(address)
        .bind(phone)
        .bind(email)
        .bind(is_active)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contact_page WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
