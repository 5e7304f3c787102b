//! Response header builders for entity alerts and pagination.
//!
//! Mutating endpoints attach `x-archiscape-alert` / `x-archiscape-params`
//! headers describing the action, and list endpoints attach `x-total-count`
//! plus an RFC 5988 `Link` header for page navigation.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue};

use archiscape_core::types::DbId;

/// Header carrying a human-readable alert message for the action performed.
pub const ALERT_HEADER: &str = "x-archiscape-alert";
/// Header carrying the identifier the alert refers to.
pub const PARAMS_HEADER: &str = "x-archiscape-params";
/// Header carrying the total row count for paginated list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

fn alert_headers(message: String, id: DbId) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(ALERT_HEADER),
        HeaderValue::from_str(&message).expect("alert messages are ASCII"),
    );
    headers.insert(HeaderName::from_static(PARAMS_HEADER), HeaderValue::from(id));
    headers
}

/// Alert headers for a newly created entity.
pub fn creation_alert(entity_name: &str, id: DbId) -> HeaderMap {
    alert_headers(
        format!("A new {entity_name} is created with identifier {id}"),
        id,
    )
}

/// Alert headers for an updated entity.
pub fn update_alert(entity_name: &str, id: DbId) -> HeaderMap {
    alert_headers(
        format!("A {entity_name} is updated with identifier {id}"),
        id,
    )
}

/// Alert headers for a deleted entity.
pub fn deletion_alert(entity_name: &str, id: DbId) -> HeaderMap {
    alert_headers(
        format!("A {entity_name} is deleted with identifier {id}"),
        id,
    )
}

/// Pagination headers for a list response: `x-total-count` plus a `Link`
/// header with `first`, `last`, and (where applicable) `next` / `prev`
/// relations.
///
/// `limit` and `offset` are the clamped values actually used for the query,
/// so the generated links land on valid pages.
pub fn pagination_headers(base_path: &str, limit: i64, offset: i64, total: i64) -> HeaderMap {
    let mut links: Vec<String> = Vec::new();

    let link = |offset: i64, rel: &str| {
        format!("<{base_path}?limit={limit}&offset={offset}>; rel=\"{rel}\"")
    };

    if offset + limit < total {
        links.push(link(offset + limit, "next"));
    }
    if offset > 0 {
        links.push(link((offset - limit).max(0), "prev"));
    }

    let last_offset = if total > 0 {
        ((total - 1) / limit) * limit
    } else {
        0
    };
    links.push(link(last_offset, "last"));
    links.push(link(0, "first"));

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOTAL_COUNT_HEADER),
        HeaderValue::from(total),
    );
    headers.insert(
        axum::http::header::LINK,
        HeaderValue::from_str(&links.join(",")).expect("link values are ASCII"),
    );
    headers
}
