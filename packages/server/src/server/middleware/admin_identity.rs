use axum::{http::HeaderMap, middleware::Next, response::Response};
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::common::AdminUser;

/// Header carrying the acting admin's user id.
///
/// Admin sign-in lives at the reverse proxy; by the time a request reaches
/// this service the proxy has already verified the session and forwards the
/// admin's id here. Requests without the header are treated as public.
pub const ADMIN_USER_HEADER: &str = "x-admin-user";

/// Resolves the forwarded admin id to an `AdminUser` row and stores it in
/// request extensions. An unknown or malformed id means the request continues
/// without an identity, so audited mutations will refuse it downstream.
pub async fn admin_identity_middleware(
    pool: PgPool,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(admin_id) = admin_id_from_headers(request.headers()) {
        match AdminUser::find_by_id(admin_id, &pool).await {
            Ok(Some(admin)) => {
                debug!(admin_id = %admin.id, username = %admin.username, "Acting admin resolved");
                request.extensions_mut().insert(admin);
            }
            Ok(None) => {
                debug!(admin_id = %admin_id, "Forwarded admin id matches no admin user");
            }
            Err(e) => {
                warn!(admin_id = %admin_id, error = %e, "Admin lookup failed");
            }
        }
    }

    next.run(request).await
}

/// Parse the admin id header, tolerating surrounding whitespace.
fn admin_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(ADMIN_USER_HEADER)?;
    let raw = value.to_str().ok()?;
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_admin_id() {
        let mut headers = HeaderMap::new();
        let id = Uuid::now_v7();
        headers.insert(ADMIN_USER_HEADER, id.to_string().parse().unwrap());

        assert_eq!(admin_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_trims_whitespace() {
        let mut headers = HeaderMap::new();
        let id = Uuid::now_v7();
        headers.insert(ADMIN_USER_HEADER, format!("  {} ", id).parse().unwrap());

        assert_eq!(admin_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(admin_id_from_headers(&headers), None);
    }

    #[test]
    fn test_rejects_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_USER_HEADER, "not-a-uuid".parse().unwrap());

        assert_eq!(admin_id_from_headers(&headers), None);
    }
}
