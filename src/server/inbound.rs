// Inbound request parsing
// Author: kelexine (https://github.com/kelexine)

use crate::error::{GatewayError, Result};
use crate::models::{InboundRequest, TargetRef};
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, HeaderMap, Request};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Split a URL path into the function name and the sub-path below it.
///
/// One leading `/` is stripped, then the rest is split on the first `/`.
/// `/orders/123` targets `orders` with path `/123`; `/orders` has no
/// sub-path and is rejected.
pub fn parse_target(raw_path: &str) -> Result<TargetRef> {
    let trimmed = raw_path.strip_prefix('/').unwrap_or(raw_path);

    match trimmed.split_once('/') {
        Some((function_name, rest)) if !function_name.is_empty() => Ok(TargetRef {
            function_name: function_name.to_string(),
            sub_path: format!("/{}", rest),
        }),
        _ => Err(GatewayError::MalformedPath(raw_path.to_string())),
    }
}

/// Collapse a header map to one value per name.
///
/// Only the first value of a repeated header is kept; later ones are
/// dropped. Names are canonicalized (`content-type` → `Content-Type`).
/// `Host` addresses the gateway itself and is not forwarded.
pub fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        if name == header::HOST {
            continue;
        }
        collected
            .entry(canonical_header_key(name.as_str()))
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    collected
}

/// MIME style header casing: first letter and every letter after a `-`
/// upper case, the rest lower case.
pub fn canonical_header_key(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
            upper = c == '-';
            mapped
        })
        .collect()
}

/// Read the whole body into memory. No size limit is applied here.
pub async fn read_body(body: Body) -> Result<bytes::Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| GatewayError::BodyRead(e.to_string()))
}

/// Remote address of the caller when the server exposes connection info.
pub fn remote_client(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Parse a raw request into its target, headers and body.
///
/// The path is checked before the body is read, so a malformed path never
/// costs a body read or an invocation.
pub async fn parse(request: Request<Body>) -> Result<InboundRequest> {
    let remote_client = remote_client(&request);
    let (parts, body) = request.into_parts();

    let raw_path = urlencoding::decode(parts.uri.path())
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| parts.uri.path().to_string());
    let target = parse_target(&raw_path)?;

    let headers = collect_headers(&parts.headers);
    let body = read_body(body).await?;

    Ok(InboundRequest {
        method: parts.method.to_string(),
        raw_path,
        target,
        headers,
        body,
        remote_client,
    })
}
