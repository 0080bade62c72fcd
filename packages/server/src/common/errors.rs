use thiserror::Error;

/// Failures of the public intake workflows (membership applications and
/// contact messages).
///
/// Every variant is recoverable at the request boundary: the form routes
/// turn them into redirect notices and in all cases nothing has been
/// persisted. Storage failures ride along untyped in `Internal` and are
/// presented as a generic failure notice.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown subject: {0}")]
    InvalidSubject(String),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("storage error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// True when `err` wraps a Postgres unique violation on the named constraint.
///
/// The membership intake relies on this to tell "email already registered"
/// apart from other storage failures without a racy pre-check.
pub fn is_unique_violation(err: &anyhow::Error, constraint: &str) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db)) => {
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
                && db.constraint() == Some(constraint)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        let err = anyhow::anyhow!("plain error");
        assert!(!is_unique_violation(&err, "members_email_key"));
    }

    #[test]
    fn wrapped_sqlx_row_not_found_is_not_a_unique_violation() {
        let err: anyhow::Error = sqlx::Error::RowNotFound.into();
        assert!(!is_unique_violation(&err, "members_email_key"));
    }
}
