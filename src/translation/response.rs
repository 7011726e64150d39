// Response translation (invocation result → HTTP parts)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{GatewayError, Result};
use crate::models::{InvocationResult, RawInvocationResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// Decode a function's result payload.
///
/// Any status the function chose is passed through; only a payload that is
/// not a result envelope, or carries a zero/out of range status, fails.
pub fn decode_result(payload: &[u8]) -> Result<InvocationResult> {
    let raw: RawInvocationResult = serde_json::from_slice(payload)
        .map_err(|e| GatewayError::ResponseDecode(e.to_string()))?;

    if raw.status_code == 0 {
        return Err(GatewayError::ResponseDecode("missing or zero statusCode".to_string()));
    }
    let status_code = u16::try_from(raw.status_code)
        .map_err(|_| GatewayError::ResponseDecode(format!("invalid statusCode {}", raw.status_code)))?;

    let body = decode_body(raw.body.unwrap_or_default(), raw.is_base64_encoded)?;

    debug!(
        "Decoded function result [code: {}, body: {} bytes, base64: {}]",
        status_code,
        body.len(),
        raw.is_base64_encoded
    );

    Ok(InvocationResult {
        status_code,
        body,
        headers: raw.headers.unwrap_or_default(),
    })
}

/// Body bytes of a result: base64 decoded when flagged, literal otherwise.
pub fn decode_body(body: String, is_base64_encoded: bool) -> Result<Vec<u8>> {
    if !is_base64_encoded {
        return Ok(body.into_bytes());
    }

    STANDARD
        .decode(body.as_bytes())
        .map_err(|source| GatewayError::BodyDecode { body, source })
}
