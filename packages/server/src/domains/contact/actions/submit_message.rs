use sqlx::PgPool;
use tracing::info;

use crate::common::IntakeError;
use crate::domains::contact::models::{ContactMessage, MessageSubject};

/// Public contact form intake. All four fields are required and the subject
/// must be one of the known keys; anything else never reaches storage.
pub async fn submit_message(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    pool: &PgPool,
) -> Result<ContactMessage, IntakeError> {
    let name = name.trim();
    let email = email.trim();
    let subject = subject.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(IntakeError::MissingField("name"));
    }
    if email.is_empty() {
        return Err(IntakeError::MissingField("email"));
    }
    if subject.is_empty() {
        return Err(IntakeError::MissingField("subject"));
    }
    if message.is_empty() {
        return Err(IntakeError::MissingField("message"));
    }

    let subject: MessageSubject = subject
        .parse()
        .map_err(|_| IntakeError::InvalidSubject(subject.to_string()))?;

    let created = ContactMessage::insert(name, email, subject, message, pool).await?;
    info!(message_id = %created.id, subject = %subject, "contact message received");

    Ok(created)
}
