// Outbound response writing
// Author: kelexine (https://github.com/kelexine)

use crate::error::{GatewayError, Result};
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::Response;
use std::collections::HashMap;

/// Write a function result to the client response.
///
/// All headers are applied before the status is committed, then the body
/// is attached in one piece. A header or status the HTTP layer cannot carry
/// fails the write; nothing is retried.
pub fn write(headers: &HashMap<String, String>, status_code: u16, body: Vec<u8>) -> Result<Response> {
    let mut builder = Response::builder();

    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| GatewayError::Write(format!("invalid header name {:?}: {}", key, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GatewayError::Write(format!("invalid value for header {}: {}", key, e)))?;
        builder = builder.header(name, value);
    }

    let status = StatusCode::from_u16(status_code)
        .map_err(|e| GatewayError::Write(format!("invalid status {}: {}", status_code, e)))?;

    builder
        .status(status)
        .body(Body::from(body))
        .map_err(|e| GatewayError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_response() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        headers.insert("X-Trace".to_string(), "abc".to_string());

        let response = write(&headers, 404, b"not found".to_vec()).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers().get("content-type").unwrap(), "text/plain");
        assert_eq!(response.headers().get("x-trace").unwrap(), "abc");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"not found");
    }

    #[test]
    fn test_invalid_header_fails() {
        let mut headers = HashMap::new();
        headers.insert("Bad Header".to_string(), "x".to_string());
        assert!(matches!(write(&headers, 200, Vec::new()), Err(GatewayError::Write(_))));

        let mut headers = HashMap::new();
        headers.insert("X-Ok".to_string(), "line\nbreak".to_string());
        assert!(matches!(write(&headers, 200, Vec::new()), Err(GatewayError::Write(_))));
    }

    #[test]
    fn test_invalid_status_fails() {
        assert!(matches!(write(&HashMap::new(), 42, Vec::new()), Err(GatewayError::Write(_))));
    }
}
