//! Public intake form endpoints.
//!
//! These mirror the browser-facing forms on the society site: the result of a
//! submission is a 303 redirect back to the page, with the outcome carried in
//! `status` and `notice` query parameters for the frontend to display.

use axum::{
    extract::Extension,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use crate::common::IntakeError;
use crate::domains::contact::actions::submit_message;
use crate::domains::members::actions::submit_application;
use crate::server::app::AppState;

/// Membership application form fields.
///
/// Everything is optional at the deserialization layer so that a partial
/// submission reaches the intake validation and comes back as a notice
/// instead of a 422.
#[derive(Deserialize)]
pub struct JoinForm {
    name: Option<String>,
    designation: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

/// POST /join - membership application intake
pub async fn join_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<JoinForm>,
) -> Response {
    let result = submit_application(
        form.name.as_deref().unwrap_or(""),
        form.designation.as_deref().unwrap_or(""),
        form.email.as_deref().unwrap_or(""),
        form.phone.as_deref(),
        &state.db_pool,
    )
    .await;

    match result {
        Ok(_) => notice_redirect(
            "/join",
            "ok",
            "Your membership application has been submitted successfully. We will review it and get back to you soon.",
        ),
        Err(IntakeError::MissingField(_)) => {
            notice_redirect("/join", "error", "Please fill in all required fields.")
        }
        Err(IntakeError::DuplicateEmail(_)) => notice_redirect(
            "/join",
            "error",
            "This email is already registered. Please use a different email address.",
        ),
        Err(e) => {
            error!(error = %e, "membership application intake failed");
            notice_redirect(
                "/join",
                "error",
                "Something went wrong. Please try again later.",
            )
        }
    }
}

/// POST /contact - contact message intake
pub async fn contact_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    let result = submit_message(
        form.name.as_deref().unwrap_or(""),
        form.email.as_deref().unwrap_or(""),
        form.subject.as_deref().unwrap_or(""),
        form.message.as_deref().unwrap_or(""),
        &state.db_pool,
    )
    .await;

    match result {
        Ok(_) => notice_redirect(
            "/contact",
            "ok",
            "Your message has been sent successfully. We will get back to you shortly.",
        ),
        Err(IntakeError::MissingField(_)) => {
            notice_redirect("/contact", "error", "Please fill in all required fields.")
        }
        Err(IntakeError::InvalidSubject(_)) => {
            notice_redirect("/contact", "error", "Please select a valid subject.")
        }
        Err(e) => {
            error!(error = %e, "contact message intake failed");
            notice_redirect(
                "/contact",
                "error",
                "Something went wrong. Please try again later.",
            )
        }
    }
}

/// 303 redirect back to `path` with the outcome in the query string.
fn notice_redirect(path: &str, status: &str, notice: &str) -> Response {
    let location = format!(
        "{}?status={}&notice={}",
        path,
        status,
        urlencoding::encode(notice)
    );
    Redirect::to(&location).into_response()
}
