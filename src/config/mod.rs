// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::cli::Args;
use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments and legacy environment names (highest, see `apply_overrides`)
    /// 2. Environment variables: `HTTP_LAMBDA_` prefix, `__` between nested
    ///    keys (`HTTP_LAMBDA_SERVER__PORT=9000`)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // An explicit --config path must exist, the default one is optional
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix("HTTP_LAMBDA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Apply CLI flags (and the legacy `PORT`, `LOG_LEVEL`, ... variables clap
    /// reads for them) on top of the loaded configuration.
    pub fn apply_overrides(&mut self, args: &Args) -> Result<()> {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(level) = non_empty(&args.log_level) {
            self.logging.level = level;
        }
        if let Some(header) = non_empty(&args.request_id_header) {
            self.gateway.request_id_header = Some(header);
        }
        if let Some(recorder) = &args.stats_recorder {
            self.stats.recorder = recorder.trim() == "true";
        }
        if let Some(url) = non_empty(&args.stats_report_url) {
            self.stats.report_url = Some(url);
        }
        if let Some(interval) = non_empty(&args.stats_report_interval) {
            self.stats.report_interval_seconds = parse_interval(&interval)?;
        }

        // An empty header name means "always generate"
        if self
            .gateway
            .request_id_header
            .as_deref()
            .is_some_and(|h| h.trim().is_empty())
        {
            self.gateway.request_id_header = None;
        }

        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".http-lambda")
            .join("config.toml")
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a report interval such as `5`, `5s`, `1500ms` or `2m` into whole
/// seconds (at least one).
pub fn parse_interval(value: &str) -> Result<u64> {
    let value = value.trim();
    let invalid = || GatewayError::Config(format!("invalid stats report interval: {:?}", value));

    let (number, scale_ms) = if let Some(n) = value.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = value.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = value.strip_suffix('m') {
        (n, 60_000)
    } else if let Some(n) = value.strip_suffix('h') {
        (n, 3_600_000)
    } else {
        (value, 1_000)
    };

    let number: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 {
        return Err(invalid());
    }

    let millis = (number * scale_ms as f64) as u64;
    Ok((millis / 1_000).max(1))
}
