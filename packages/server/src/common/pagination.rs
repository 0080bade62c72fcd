//! Forward-only cursor pagination for the admin list queries.
//!
//! Cursors are base64-encoded row UUIDs. The paginated tables use
//! time-ordered v7 ids, so paging by `id` descending walks newest-to-oldest
//! without a separate sort key.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: i64 = 25;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Encode a row id as an opaque cursor string.
pub fn encode_cursor(id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a cursor string back into a row id.
pub fn decode_cursor(s: &str) -> Result<Uuid> {
    let bytes = URL_SAFE_NO_PAD
        .decode(s)
        .context("invalid cursor: not valid base64")?;
    Uuid::from_slice(&bytes).context("invalid cursor: not a UUID")
}

/// Page information returned alongside a page of rows.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Forward pagination state")]
pub struct PageInfo {
    /// Whether another page exists after this one.
    pub has_next_page: bool,
    /// Cursor of the last row in the page, to pass as `after`.
    pub end_cursor: Option<String>,
}

/// Validated page request: a clamped limit plus an optional exclusive
/// starting point (only rows strictly older than `after` are returned).
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub after: Option<Uuid>,
}

impl Page {
    /// Build a page request from raw GraphQL arguments.
    pub fn from_args(first: Option<i32>, after: Option<&str>) -> Result<Self> {
        let limit = match first {
            Some(n) if n <= 0 => anyhow::bail!("first must be positive"),
            Some(n) => i64::from(n).min(MAX_PAGE_SIZE),
            None => DEFAULT_PAGE_SIZE,
        };
        let after = after.map(decode_cursor).transpose()?;
        Ok(Self { limit, after })
    }

    /// Limit to fetch: one extra row reveals whether a next page exists.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }

    /// Split an over-fetched result into the page slice and its `PageInfo`.
    pub fn slice<T>(&self, mut rows: Vec<T>, cursor_of: impl Fn(&T) -> Uuid) -> (Vec<T>, PageInfo) {
        let has_next_page = rows.len() as i64 > self.limit;
        if has_next_page {
            rows.truncate(self.limit as usize);
        }
        let end_cursor = rows.last().map(|row| encode_cursor(cursor_of(row)));
        (rows, PageInfo { has_next_page, end_cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_survives_encode_decode() {
        let id = Uuid::now_v7();
        assert_eq!(decode_cursor(&encode_cursor(id)).unwrap(), id);
    }

    #[test]
    fn garbage_cursor_is_rejected() {
        assert!(decode_cursor("not a cursor!").is_err());
        // Valid base64 but the wrong number of bytes.
        assert!(decode_cursor(&URL_SAFE_NO_PAD.encode(b"abc")).is_err());
    }

    #[test]
    fn limit_is_clamped_and_defaulted() {
        assert_eq!(Page::from_args(None, None).unwrap().limit, DEFAULT_PAGE_SIZE);
        assert_eq!(Page::from_args(Some(500), None).unwrap().limit, MAX_PAGE_SIZE);
        assert!(Page::from_args(Some(0), None).is_err());
        assert!(Page::from_args(Some(-3), None).is_err());
    }

    #[test]
    fn slice_detects_next_page_from_overfetch() {
        let page = Page { limit: 2, after: None };
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::now_v7()).collect();

        let (rows, info) = page.slice(ids.clone(), |id| *id);
        assert_eq!(rows.len(), 2);
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor, Some(encode_cursor(ids[1])));

        let (rows, info) = page.slice(vec![ids[0]], |id| *id);
        assert_eq!(rows.len(), 1);
        assert!(!info.has_next_page);
    }
}
