//! Configuration data structures for the http-lambda gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! listener, logging, correlation ids, the invocation backend and the
//! optional stats recorder.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
///
/// Built once at startup and handed to the router and the invoker; it is
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-request handling settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Invocation backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Stats recorder and reporter settings.
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8090`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of tokio worker threads.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Unknown values fall back to `debug`.
    /// Default: `debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Settings for per-request handling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Inbound header carrying the caller's correlation id. When unset every
    /// request gets a freshly generated id.
    #[serde(default)]
    pub request_id_header: Option<String>,
}

/// Settings for the function invocation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the Lambda invoke API.
    /// Default: `http://127.0.0.1:3001` (local Lambda runtime)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout for a single invocation, in seconds.
    /// Default: `300`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for request stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Record request stats in the in-process registry.
    /// Default: `false`
    #[serde(default)]
    pub recorder: bool,

    /// URL the recorded stats are pushed to. Setting it implies `recorder`.
    #[serde(default)]
    pub report_url: Option<String>,

    /// Seconds between two pushes to `report_url`.
    /// Default: `5`
    #[serde(default = "default_report_interval")]
    pub report_interval_seconds: u64,
}

impl StatsConfig {
    pub fn recorder_enabled(&self) -> bool {
        self.recorder || self.reporter_enabled()
    }

    pub fn reporter_enabled(&self) -> bool {
        self.report_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recorder: false,
            report_url: None,
            report_interval_seconds: default_report_interval(),
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_workers() -> usize {
    num_cpus::get()
}

pub(crate) fn default_log_level() -> String {
    "debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3001".to_string()
}

fn default_timeout() -> u64 {
    300
}

fn default_report_interval() -> u64 {
    5
}
