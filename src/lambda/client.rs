// Lambda invoke API client
// Author: kelexine (https://github.com/kelexine)

use super::{BackendError, Invoker};
use crate::config::BackendConfig;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Header set by the invoke API when the function itself raised an error.
const FUNCTION_ERROR_HEADER: &str = "X-Amz-Function-Error";

/// Client for the Lambda `Invoke` REST API.
///
/// Talks to any endpoint serving `POST /2015-03-31/functions/{name}/invocations`
/// with synchronous (`RequestResponse`) semantics, such as a local Lambda
/// runtime emulator.
pub struct LambdaInvoker {
    http_client: Client,
    endpoint: String,
}

impl LambdaInvoker {
    /// Create a new invoker with a pooled HTTP client.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created invoke client for {}", config.endpoint);

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Get the invoke API base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn invocation_url(&self, function_name: &str) -> String {
        format!(
            "{}/2015-03-31/functions/{}/invocations",
            self.endpoint,
            urlencoding::encode(function_name)
        )
    }

    /// Extract the service's error message from an invoke API error body
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            #[serde(alias = "Message")]
            message: Option<String>,
            #[serde(rename = "Type")]
            error_type: Option<String>,
        }

        let error = serde_json::from_str::<ErrorResponse>(response_text).ok()?;
        match (error.error_type, error.message) {
            (Some(error_type), Some(message)) => Some(format!("{}: {}", error_type, message)),
            (None, Some(message)) => Some(message),
            (Some(error_type), None) => Some(error_type),
            (None, None) => None,
        }
    }
}

#[async_trait]
impl Invoker for LambdaInvoker {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> std::result::Result<Bytes, BackendError> {
        let url = self.invocation_url(function_name);
        debug!("Calling invoke API at {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("X-Amz-Invocation-Type", "RequestResponse")
            .body(payload)
            .send()
            .await
            .map_err(|e| BackendError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = Self::extract_error_message(&error_text).unwrap_or(error_text);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // The function ran but failed; its error payload is handed on and
        // will not decode as a proxy response.
        if let Some(function_error) = response.headers().get(FUNCTION_ERROR_HEADER) {
            warn!(
                "Function {} reported an error: {}",
                function_name,
                function_error.to_str().unwrap_or("<non-ascii>")
            );
        }

        response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(Box::new(e)))
    }
}
