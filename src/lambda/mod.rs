// Function invocation backend module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::LambdaInvoker;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Failure reported by an invocation backend before any function result
/// was obtained.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Other(String),
}

/// Blocking request/response invocation of a named function.
///
/// The payload is the serialized invocation envelope; the function name is
/// passed separately and never embedded in the payload.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Bytes, BackendError>;
}
