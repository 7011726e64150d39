// CLI module for http-lambda
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// http-lambda - HTTP gateway that forwards requests to serverless functions
#[derive(Parser, Debug, Default)]
#[command(name = "http-lambda", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.http-lambda/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Inbound header holding the request correlation id
    #[arg(long, env = "REQUEST_ID_HEADER")]
    pub request_id_header: Option<String>,

    /// Record request stats (enabled only by the value `true`)
    #[arg(long, env = "STATS_RECORDER")]
    pub stats_recorder: Option<String>,

    /// Push recorded stats to this URL
    #[arg(long, env = "STATS_REPORT_URL")]
    pub stats_report_url: Option<String>,

    /// Interval between stats pushes (e.g. 5s)
    #[arg(long, env = "STATS_REPORT_INTERVAL")]
    pub stats_report_interval: Option<String>,
}
