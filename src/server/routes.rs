// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::gateway_handler;
use crate::config::AppConfig;
use crate::lambda::Invoker;
use crate::translation::Translator;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Translator,
}

/// Build the gateway router.
///
/// Every method and path goes to the same handler; the first path segment
/// names the function. Bodies are not size limited.
pub fn create_router(config: AppConfig, invoker: Arc<dyn Invoker>) -> Router {
    let state = AppState {
        config: Arc::new(config),
        translator: Translator::new(invoker),
    };

    Router::new()
        .fallback(gateway_handler)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
