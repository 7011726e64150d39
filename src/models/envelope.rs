// Invocation envelope type definitions
// Author: kelexine (https://github.com/kelexine)
// Field names follow the API Gateway proxy integration event format

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request envelope sent to the function.
///
/// The body is always base64 text and `is_base64_encoded` is always `true`,
/// whatever the inbound content type was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEnvelope {
    /// Inbound HTTP method (e.g. `GET`).
    pub http_method: String,

    /// Sub-path below the function name, always starting with `/`.
    pub path: String,

    /// Inbound headers, one value per name.
    pub headers: HashMap<String, String>,

    /// Base64 encoded request body.
    pub body: String,

    pub is_base64_encoded: bool,
}

/// Result envelope as returned by the function, before validation.
///
/// Missing or `null` fields decode to their empty values so that only a
/// structurally broken payload fails here; a zero status is rejected later.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInvocationResult {
    #[serde(default)]
    pub status_code: i64,

    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// Validated function result, ready for the outbound writer.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    /// Non-zero HTTP status chosen by the function.
    pub status_code: u16,

    /// Decoded response body.
    pub body: Vec<u8>,

    pub headers: HashMap<String, String>,
}
