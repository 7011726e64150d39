// Periodic push of recorded stats
// Author: kelexine (https://github.com/kelexine)

use super::gather_metrics;
use crate::config::StatsConfig;
use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Start the stats reporter if a report URL is configured.
///
/// The task pushes the Prometheus text exposition to the URL every
/// `report_interval_seconds`. Push failures are logged and never reach
/// request handling.
pub fn spawn(config: &StatsConfig) -> Option<JoinHandle<()>> {
    if !config.reporter_enabled() {
        return None;
    }
    let url = config.report_url.clone()?;
    let period = Duration::from_secs(config.report_interval_seconds.max(1));

    info!("Reporting stats to {} every {}s", url, period.as_secs());

    Some(tokio::spawn(async move {
        let client = Client::new();
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = push(&client, &url).await {
                warn!("Failed to report stats to {}: {}", url, e);
            }
        }
    }))
}

/// Push the current stats once.
pub async fn push(client: &Client, url: &str) -> anyhow::Result<()> {
    let body = gather_metrics()?;

    let response = client
        .post(url)
        .header("Content-Type", TEXT_FORMAT)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("stats endpoint answered HTTP {}", status);
    }

    debug!("Reported stats to {}", url);
    Ok(())
}
