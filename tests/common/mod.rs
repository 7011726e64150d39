// Shared test helpers
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use bytes::Bytes;
use http_lambda::config::AppConfig;
use http_lambda::lambda::{BackendError, Invoker};
use http_lambda::models::InvocationEnvelope;
use http_lambda::server::create_router;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// What the fake backend answers with.
#[derive(Clone)]
pub enum Reply {
    Payload(String),
    Fail(String),
}

/// One recorded invocation.
#[derive(Clone, Debug)]
pub struct Call {
    pub function_name: String,
    pub payload: Vec<u8>,
}

impl Call {
    pub fn envelope(&self) -> InvocationEnvelope {
        serde_json::from_slice(&self.payload).expect("payload is an invocation envelope")
    }
}

/// In-memory invoker returning a canned reply and recording every call.
pub struct FakeInvoker {
    reply: Reply,
    calls: Mutex<Vec<Call>>,
}

impl FakeInvoker {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(payload: serde_json::Value) -> Arc<Self> {
        Self::new(Reply::Payload(payload.to_string()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invoker for FakeInvoker {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Bytes, BackendError> {
        self.calls.lock().unwrap().push(Call {
            function_name: function_name.to_string(),
            payload,
        });

        match &self.reply {
            Reply::Payload(body) => Ok(Bytes::from(body.clone())),
            Reply::Fail(detail) => Err(BackendError::Other(detail.clone())),
        }
    }
}

pub fn router(config: AppConfig, invoker: Arc<FakeInvoker>) -> Router {
    create_router(config, invoker)
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    (Response::from_parts(parts, Body::empty()), bytes)
}
