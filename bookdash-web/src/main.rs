//! bookdash-web - Trending books dashboard service
//!
//! Loads the book catalog and customer reviews once at startup and serves
//! filtered tables, summary metrics, chart series and book details as JSON.
//!
//! Any data loading fault (missing file, missing price column, catalog empty
//! after coercion) aborts startup before the listener binds.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bookdash_common::config::{self, TomlConfig};
use bookdash_common::Dataset;
use bookdash_web::api::BuildInfo;
use bookdash_web::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for bookdash-web
#[derive(Parser, Debug)]
#[command(name = "bookdash-web")]
#[command(about = "Trending books data-exploration dashboard service")]
#[command(version)]
struct Args {
    /// Book catalog CSV (overrides BOOKDASH_CATALOG and config file)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Customer reviews CSV (overrides BOOKDASH_REVIEWS and config file)
    #[arg(long)]
    reviews: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing init so the configured level applies;
    // a config error is reported once the subscriber exists
    let config_result = config::load_config();
    let log_level = config_result
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let default_filter =
        format!("bookdash_web={0},bookdash_common={0},tower_http=info", log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification immediately after tracing init
    let build = BuildInfo::CURRENT;
    info!(
        "Starting Books Dashboard (bookdash-web) v{} [{}] built {} ({})",
        build.version, build.git_hash, build.build_timestamp, build.build_profile
    );

    let config: TomlConfig = match config_result {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e).context("Configuration error");
        }
    };

    let sources = config::resolve_data_sources(
        args.catalog.as_deref(),
        args.reviews.as_deref(),
        &config,
    );
    info!("Catalog source: {}", sources.catalog.display());
    info!("Reviews source: {}", sources.reviews.display());

    // No partial dashboard: any load fault stops here
    let dataset = match Dataset::open(&sources) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dashboard data: {}", e);
            return Err(e).context("Dashboard data could not be loaded");
        }
    };

    let report = dataset.catalog().report();
    info!(
        "✓ Dataset ready: {} books ({} dropped), {} reviews",
        report.loaded_rows,
        report.dropped_rows(),
        dataset.reviews().len()
    );
    if !dataset.catalog().genre_available() {
        warn!("Genre filter unavailable for this catalog");
    }

    let app = build_router(AppState::new(dataset));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("bookdash-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
