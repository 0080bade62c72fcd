use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::{is_unique_violation, IntakeError};
use crate::domains::members::models::{Member, SocietyDesignation};

/// Public membership application intake.
///
/// Applications land as inactive general members; an admin reviews and
/// promotes them from the roster editor. The `members_email_key` constraint
/// is the only duplicate guard, so two simultaneous submissions of the same
/// address cannot both get through.
pub async fn submit_application(
    name: &str,
    designation: &str,
    email: &str,
    phone: Option<&str>,
    pool: &PgPool,
) -> Result<Member, IntakeError> {
    let name = name.trim();
    let designation = designation.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(IntakeError::MissingField("name"));
    }
    if designation.is_empty() {
        return Err(IntakeError::MissingField("designation"));
    }
    if email.is_empty() {
        return Err(IntakeError::MissingField("email"));
    }

    let member = Member {
        id: Uuid::now_v7(),
        title: format!("Membership Application - {}", name),
        content: format!(
            "Application received from {} for position {}",
            name, designation
        ),
        member_name: name.to_string(),
        member_position: designation.to_string(),
        member_image: None,
        member_bio: None,
        email: email.to_string(),
        phone_number: phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        date_of_joining: None,
        society_designation: SocietyDesignation::GeneralMember.as_str().to_string(),
        is_active: false,
        last_updated: Utc::now(),
    };

    match member.insert(pool).await {
        Ok(created) => {
            info!(member_id = %created.id, "membership application received");
            Ok(created)
        }
        Err(e) if is_unique_violation(&e, "members_email_key") => {
            Err(IntakeError::DuplicateEmail(email.to_string()))
        }
        Err(e) => Err(IntakeError::Internal(e)),
    }
}
