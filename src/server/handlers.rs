// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use super::{inbound, outbound};
use crate::error::Result;
use crate::metrics;
use crate::utils::request_id;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use std::time::Instant;
use tracing::{debug, error, field, info, info_span, Instrument, Span};

/// Catch-all handler: `/{function}/{path...}` with any method.
///
/// Runs the request through parse → invoke → write inside a span carrying
/// the request's correlation id. Any failure is logged once and answered
/// with an explicit error status.
pub async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id::resolve(
        state.config.gateway.request_id_header.as_deref(),
        request.headers(),
    );
    let span = info_span!("request", request_id = %request_id, function = field::Empty);

    async move {
        let recorder = state.config.stats.recorder_enabled();
        match proxy(&state, request, recorder).await {
            Ok(response) => response,
            Err(e) => {
                error!("{}", e);
                if recorder {
                    if let Some(stage) = e.stage() {
                        metrics::record_failure(stage, e.kind());
                    }
                }
                e.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

async fn proxy(state: &AppState, request: Request<Body>, recorder: bool) -> Result<Response> {
    let client = inbound::remote_client(&request);
    debug!("received request {} {} from client {}", request.method(), request.uri(), client);

    let parsed = inbound::parse(request).await?;
    let function_name = parsed.target.function_name.clone();
    Span::current().record("function", function_name.as_str());

    let started = Instant::now();
    let result = state
        .translator
        .invoke(
            &function_name,
            &parsed.method,
            &parsed.target.sub_path,
            parsed.headers,
            &parsed.body,
        )
        .await?;
    if recorder {
        metrics::record_invocation(&function_name, started.elapsed().as_secs_f64());
    }

    let status_code = result.status_code;
    let body_len = result.body.len();
    let response = outbound::write(&result.headers, status_code, result.body)?;
    debug!("wrote response [code: {}, body {} bytes] to client {}", status_code, body_len, client);

    if recorder {
        metrics::record_request(&function_name, status_code, body_len);
    }
    info!(
        "proxied request to {} [code: {}, body {} bytes] for client {}",
        function_name, status_code, body_len, client
    );
    Ok(response)
}
