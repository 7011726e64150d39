// Request translation (HTTP → invocation envelope)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{GatewayError, Result};
use crate::models::InvocationEnvelope;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::HashMap;

/// Build the invocation envelope for one request.
///
/// The body is base64 encoded unconditionally so no content sniffing is
/// needed; an empty body encodes to an empty string.
pub fn build_envelope(
    http_method: &str,
    path: &str,
    headers: HashMap<String, String>,
    body: &[u8],
) -> InvocationEnvelope {
    InvocationEnvelope {
        http_method: http_method.to_string(),
        path: path.to_string(),
        headers,
        body: STANDARD.encode(body),
        is_base64_encoded: true,
    }
}

/// Serialize the envelope into the JSON payload handed to the backend.
pub fn encode_payload(function_name: &str, envelope: &InvocationEnvelope) -> Result<Vec<u8>> {
    serde_json::to_vec(envelope).map_err(|e| GatewayError::Invoke {
        function: function_name.to_string(),
        detail: format!("error marshalling request: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_get_without_body() {
        let envelope = build_envelope("GET", "/123", HashMap::new(), b"");

        assert_eq!(envelope.http_method, "GET");
        assert_eq!(envelope.path, "/123");
        assert_eq!(envelope.body, "");
        assert!(envelope.is_base64_encoded);
    }

    #[test]
    fn test_body_is_base64() {
        let envelope = build_envelope("POST", "/", HashMap::new(), b"{\"id\":1}");
        assert_eq!(envelope.body, "eyJpZCI6MX0=");
    }

    #[test]
    fn test_payload_field_names() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let envelope = build_envelope("PUT", "/items/7", headers, b"hi");

        let payload = encode_payload("orders", &envelope).unwrap();
        let json: Value = serde_json::from_slice(&payload).unwrap();

        assert_eq!(json["httpMethod"], "PUT");
        assert_eq!(json["path"], "/items/7");
        assert_eq!(json["headers"]["Content-Type"], "application/json");
        assert_eq!(json["body"], "aGk=");
        assert_eq!(json["isBase64Encoded"], true);
        // The function name travels beside the payload, not inside it
        assert!(!String::from_utf8(payload).unwrap().contains("orders"));
    }
}
