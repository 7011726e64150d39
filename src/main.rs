// http-lambda - HTTP to serverless function invocation gateway
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use http_lambda::cli::Args;
use http_lambda::config::AppConfig;
use http_lambda::lambda::LambdaInvoker;
use http_lambda::metrics::reporter;
use http_lambda::server::create_router;
use http_lambda::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration (read-only from here on)
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_overrides(&args)?;

    // Phase 2: Build the runtime with the configured worker count
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    // Phase 3: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting http-lambda v{}", env!("CARGO_PKG_VERSION"));

    // Phase 4: Invocation backend
    let invoker = LambdaInvoker::new(&config.backend)?;
    info!("Invoking functions via {}", invoker.endpoint());

    // Phase 5: Stats reporter
    let reporter = reporter::spawn(&config.stats);

    // Phase 6: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, Arc::new(invoker));

    info!("starting http lambda gateway on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 7: Run server with graceful shutdown
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = reporter {
        handle.abort();
    }

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
