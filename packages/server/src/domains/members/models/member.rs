use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::Page;
use crate::domains::members::models::SocietyDesignation;

/// Society member - SQL persistence layer.
///
/// Rows come from two places: the public membership application form (which
/// creates inactive rows pending review) and the admin roster editor. Email
/// uniqueness is enforced by the `members_email_key` constraint, not by a
/// pre-check, so concurrent duplicate applications cannot race past intake.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub member_name: String,
    pub member_position: String,
    pub member_image: Option<String>,
    pub member_bio: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub society_designation: String,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl Member {
    /// Surfaces the `members_email_key` unique violation untranslated;
    /// intake maps it to a duplicate-email rejection.
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO members (
                id, title, content, member_name, member_position, member_image,
                member_bio, email, phone_number, date_of_joining,
                society_designation, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.member_name)
        .bind(&self.member_position)
        .bind(&self.member_image)
        .bind(&self.member_bio)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.date_of_joining)
        .bind(&self.society_designation)
        .bind(self.is_active)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE members
            SET title = $2, content = $3, member_name = $4, member_position = $5,
                member_image = $6, member_bio = $7, email = $8, phone_number = $9,
                date_of_joining = $10, society_designation = $11, is_active = $12,
                last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .bind(&self.member_name)
        .bind(&self.member_position)
        .bind(&self.member_image)
        .bind(&self.member_bio)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.date_of_joining)
        .bind(&self.society_designation)
        .bind(self.is_active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Flips roster visibility without touching the rest of the profile.
    pub async fn set_active(id: Uuid, active: bool, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE members
            SET is_active = $2, last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(active)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Published roster. Sorts on the stored designation key, then name.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM members
            WHERE is_active = true
            ORDER BY society_designation, member_name
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Admin listing: filterable, searchable, keyset-paginated newest first.
    /// Fetches one row past the page limit so the caller can detect more.
    pub async fn admin_search(
        designation: Option<&str>,
        active: Option<bool>,
        search: Option<&str>,
        page: &Page,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM members
            WHERE ($1::text IS NULL OR society_designation = $1)
              AND ($2::boolean IS NULL OR is_active = $2)
              AND ($3::text IS NULL
                   OR member_name ILIKE '%' || $3 || '%'
                   OR member_position ILIKE '%' || $3 || '%'
                   OR email ILIKE '%' || $3 || '%'
                   OR phone_number ILIKE '%' || $3 || '%')
              AND ($4::uuid IS NULL OR id < $4)
            ORDER BY id DESC
            LIMIT $5
            "#,
        )
        .bind(designation)
        .bind(active)
        .bind(search)
        .bind(page.after)
        .bind(page.fetch_limit())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Everyone except general members counts as executive.
    pub fn is_executive_member(&self) -> bool {
        self.society_designation != SocietyDesignation::GeneralMember.as_str()
    }
}
