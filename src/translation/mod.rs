// Translation module - HTTP request ↔ function invocation envelopes
// Author: kelexine (https://github.com/kelexine)

pub mod request;
pub mod response;

pub use request::{build_envelope, encode_payload};
pub use response::{decode_body, decode_result};

use crate::error::{GatewayError, Result};
use crate::lambda::Invoker;
use crate::models::InvocationResult;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Turns a parsed request into one backend invocation and decodes its result.
///
/// Holds no per-request state; clones share the same invoker.
#[derive(Clone)]
pub struct Translator {
    invoker: Arc<dyn Invoker>,
}

impl Translator {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }

    /// Invoke `function_name` with the request and decode what it returned.
    ///
    /// Transport and backend failures become `Invoke`, unusable results
    /// `ResponseDecode` or `BodyDecode`. Nothing is retried.
    pub async fn invoke(
        &self,
        function_name: &str,
        http_method: &str,
        path: &str,
        headers: HashMap<String, String>,
        body: &[u8],
    ) -> Result<InvocationResult> {
        debug!(
            "invoking function {} with {} {} [body: {} bytes]",
            function_name,
            http_method,
            path,
            body.len()
        );

        let envelope = build_envelope(http_method, path, headers, body);
        let payload = encode_payload(function_name, &envelope)?;

        let response = self
            .invoker
            .invoke(function_name, payload)
            .await
            .map_err(|e| GatewayError::Invoke {
                function: function_name.to_string(),
                detail: e.to_string(),
            })?;

        let result = decode_result(&response)?;

        debug!(
            "received response from function {} [code: {}, body: {} bytes]",
            function_name,
            result.status_code,
            result.body.len()
        );
        Ok(result)
    }
}
