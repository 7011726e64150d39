// Per-request correlation ids
// Author: kelexine (https://github.com/kelexine)

use axum::http::HeaderMap;

/// Resolve the correlation id for one request.
///
/// The first value of the configured header is used when present and
/// non-empty; otherwise a new UUID v4 is generated. The id lives only as
/// long as the request's span.
pub fn resolve(header_name: Option<&str>, headers: &HeaderMap) -> String {
    header_name
        .and_then(|name| headers.get(name))
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
