// Parsed inbound request types
// Author: kelexine (https://github.com/kelexine)

use bytes::Bytes;
use std::collections::HashMap;

/// Function name and sub-path derived from the inbound URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef {
    /// First path segment, the function to invoke.
    pub function_name: String,

    /// Everything after the function name, with a leading `/`.
    pub sub_path: String,
}

/// An inbound HTTP request after parsing. Immutable once built.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: String,
    pub raw_path: String,
    pub target: TargetRef,

    /// First value of every inbound header.
    pub headers: HashMap<String, String>,

    pub body: Bytes,

    /// Remote address of the caller, or `unknown`.
    pub remote_client: String,
}
