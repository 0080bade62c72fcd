use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::Page;
use crate::domains::contact::models::MessageSubject;

/// Visitor message in the admin inbox - SQL persistence layer.
///
/// Resolution state is a triple kept consistent by the
/// `resolution_consistent` check constraint: `is_resolved`, `resolved_at`
/// and `resolved_by` move together. The resolve and unresolve transitions
/// are single guarded UPDATEs, so they are atomic per row and idempotent
/// under concurrent clicks: only one caller observes the transition.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<Uuid>,
    pub notes: String,
}

impl ContactMessage {
    /// Intake insert. The subject has already been validated, so only the
    /// typed key ever reaches storage.
    pub async fn insert(
        name: &str,
        email: &str,
        subject: MessageSubject,
        message: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO contact_messages (id, name, email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(name)
        .bind(email)
        .bind(subject.as_str())
        .bind(message)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM contact_messages WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Marks a message resolved, stamping when and by whom. Returns `None`
    /// when the row is missing or someone else already resolved it; notes on
    /// an already-resolved message are left untouched.
    pub async fn resolve(
        id: Uuid,
        resolved_by: Uuid,
        notes: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE contact_messages
            SET is_resolved = true, resolved_at = NOW(), resolved_by = $2, notes = $3
            WHERE id = $1 AND is_resolved = false
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(resolved_by)
        .bind(notes)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Reopens a resolved message, clearing the audit pair. The notes are
    /// discarded along with it; reopening means the resolution was wrong.
    pub async fn unresolve(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE contact_messages
            SET is_resolved = false, resolved_at = NULL, resolved_by = NULL, notes = ''
            WHERE id = $1 AND is_resolved = true
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Direct inbox edit: set the resolved flag and notes in one shot and
    /// derive the audit pair. Flipping to resolved stamps now/the caller;
    /// re-saving an already-resolved message keeps its original stamp;
    /// flipping to unresolved clears both.
    pub async fn admin_update(
        id: Uuid,
        is_resolved: bool,
        notes: &str,
        acting_admin: Uuid,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE contact_messages
            SET notes = $3,
                resolved_at = CASE
                    WHEN $2 AND NOT is_resolved THEN NOW()
                    WHEN NOT $2 THEN NULL
                    ELSE resolved_at
                END,
                resolved_by = CASE
                    WHEN $2 AND NOT is_resolved THEN $4
                    WHEN NOT $2 THEN NULL
                    ELSE resolved_by
                END,
                is_resolved = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(is_resolved)
        .bind(notes)
        .bind(acting_admin)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Inbox listing: filterable, searchable, keyset-paginated newest first.
    /// Fetches one row past the page limit so the caller can detect more.
    pub async fn admin_search(
        resolved: Option<bool>,
        subject: Option<MessageSubject>,
        search: Option<&str>,
        page: &Page,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM contact_messages
            WHERE ($1::boolean IS NULL OR is_resolved = $1)
              AND ($2::text IS NULL OR subject = $2)
              AND ($3::text IS NULL
                   OR name ILIKE '%' || $3 || '%'
                   OR email ILIKE '%' || $3 || '%'
                   OR message ILIKE '%' || $3 || '%'
                   OR notes ILIKE '%' || $3 || '%')
              AND ($4::uuid IS NULL OR id < $4)
            ORDER BY id DESC
            LIMIT $5
            "#,
        )
        .bind(resolved)
        .bind(subject.map(|s| s.as_str()))
        .bind(search)
        .bind(page.after)
        .bind(page.fetch_limit())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
