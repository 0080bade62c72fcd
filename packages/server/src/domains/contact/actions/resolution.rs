use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::contact::models::ContactMessage;

/// Resolve a batch of inbox messages, stamping each with the acting admin.
///
/// Rows go one at a time through the guarded UPDATE, so messages someone
/// else resolves mid-batch are skipped rather than restamped. The returned
/// count is the number of rows this call actually transitioned, which is
/// also what the admin UI reports.
pub async fn resolve_messages(
    ids: &[Uuid],
    resolved_by: Uuid,
    notes: &str,
    pool: &PgPool,
) -> Result<i64> {
    let mut count = 0;
    for &id in ids {
        if ContactMessage::resolve(id, resolved_by, notes, pool)
            .await?
            .is_some()
        {
            count += 1;
        }
    }

    info!(requested = ids.len(), resolved = count, "bulk resolve finished");
    Ok(count)
}

/// Reopen a batch of messages. Only rows that were resolved count.
pub async fn unresolve_messages(ids: &[Uuid], pool: &PgPool) -> Result<i64> {
    let mut count = 0;
    for &id in ids {
        if ContactMessage::unresolve(id, pool).await?.is_some() {
            count += 1;
        }
    }

    info!(requested = ids.len(), reopened = count, "bulk unresolve finished");
    Ok(count)
}
