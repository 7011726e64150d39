//! Structured logging setup.
//!
//! Configures the `tracing` ecosystem for the gateway. Every request is
//! handled inside a `request` span carrying its `request_id`, so all of its
//! log lines share the same correlation id.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the configured one cannot be parsed.
pub const FALLBACK_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(resolve_level(&config.level).into()));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Map a named level to a filter, falling back to `debug`.
///
/// Besides the tracing names this accepts `warning`, `fatal` and `panic`
/// (the latter two map to `error`).
pub fn resolve_level(level: &str) -> LevelFilter {
    let level = level.trim().to_ascii_lowercase();
    match level.as_str() {
        "warning" => LevelFilter::WARN,
        "" => FALLBACK_LEVEL,
        "fatal" | "panic" => LevelFilter::ERROR,
        other => LevelFilter::from_str(other).unwrap_or(FALLBACK_LEVEL),
    }
}
