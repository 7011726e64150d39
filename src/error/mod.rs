// Error types for the http-lambda gateway
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Terminal failure state a request ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ParseFailed,
    InvokeFailed,
    WriteFailed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ParseFailed => "parse",
            Stage::InvokeFailed => "invoke",
            Stage::WriteFailed => "write",
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("malformed path {0:?}: expected /{{function}}/{{path}}")]
    MalformedPath(String),

    #[error("error reading request body: {0}")]
    BodyRead(String),

    #[error("error calling {function}: {detail}")]
    Invoke { function: String, detail: String },

    #[error("error unmarshalling response: {0}")]
    ResponseDecode(String),

    #[error("error decoding body {body}: {source}")]
    BodyDecode {
        body: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("error writing response: {0}")]
    Write(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),
}

impl GatewayError {
    /// The request state machine's failure state for this error, if it is a per-request one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            GatewayError::MalformedPath(_) | GatewayError::BodyRead(_) => Some(Stage::ParseFailed),
            GatewayError::Invoke { .. }
            | GatewayError::ResponseDecode(_)
            | GatewayError::BodyDecode { .. } => Some(Stage::InvokeFailed),
            GatewayError::Write(_) => Some(Stage::WriteFailed),
            _ => None,
        }
    }

    /// Short machine-readable kind, used for the error body and failure metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::MalformedPath(_) => "malformed_path",
            GatewayError::BodyRead(_) => "body_read_error",
            GatewayError::Invoke { .. } => "invoke_error",
            GatewayError::ResponseDecode(_) => "response_decode_error",
            GatewayError::BodyDecode { .. } => "body_decode_error",
            GatewayError::Write(_) => "write_error",
            GatewayError::Config(_) | GatewayError::ConfigParsing(_) => "configuration_error",
            GatewayError::Io(_) => "io_error",
        }
    }

    /// Fixed message returned to clients. The full error text only goes to the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            GatewayError::MalformedPath(_) => "path must be /{function}/{path}",
            GatewayError::BodyRead(_) => "request body could not be read",
            GatewayError::Invoke { .. } => "function invocation failed",
            GatewayError::ResponseDecode(_) => "function returned an invalid response",
            GatewayError::BodyDecode { .. } => "function returned an undecodable body",
            GatewayError::Write(_) => "function response could not be written",
            _ => "internal gateway error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MalformedPath(_) | GatewayError::BodyRead(_) => StatusCode::BAD_REQUEST,
            GatewayError::Invoke { .. }
            | GatewayError::ResponseDecode(_)
            | GatewayError::BodyDecode { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Every failed request gets an explicit status instead of a dropped connection.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = json!({
            "type": "error",
            "error": {
                "type": self.kind(),
                "message": self.client_message(),
            }
        });

        (self.status_code(), axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
