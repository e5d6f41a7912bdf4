//! Wuqumo CLI
//!
//! Command-line interface for the wuqumo transcode mapping service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wuqumo_api::{ApiConfig, ApiServer};
use wuqumo_cache::{MappingCache, Refresher, Snapshot};
use wuqumo_core::{SheetSource, WuqumoError};
use wuqumo_sheet::SheetReader;

/// Wuqumo - LCP to wuqumo transcode mapping service
#[derive(Parser)]
#[command(name = "wuqumo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server with the background cache refresher
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,

        /// Path to the transcode sheet
        #[arg(long, env = "CSV_FILE")]
        csv: Option<PathBuf>,

        /// Snapshot TTL in seconds (overrides CACHE_TTL_SECS)
        #[arg(long)]
        ttl_secs: Option<u64>,
    },

    /// Load the transcode sheet once and report what would be served
    Check {
        /// Path to the transcode sheet
        #[arg(long, env = "CSV_FILE")]
        csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "wuqumo=debug,info"
    } else {
        "wuqumo=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            csv,
            ttl_secs,
        } => cmd_serve(port, &bind, csv, ttl_secs).await,
        Commands::Check { csv } => cmd_check(csv).await,
    }
}

/// Run the API server
async fn cmd_serve(
    port: Option<u16>,
    bind: &str,
    csv: Option<PathBuf>,
    ttl_secs: Option<u64>,
) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(path) = csv {
        config.sheet_path = path;
    }
    if let Some(secs) = ttl_secs {
        if secs == 0 {
            return Err(WuqumoError::ConfigError("--ttl-secs must be positive".into()).into());
        }
        config.ttl = Duration::from_secs(secs);
    }

    let cache = Arc::new(MappingCache::new());
    let source = Arc::new(SheetReader::new(config.sheet_path.clone()));
    let refresher = Refresher::new(cache.clone(), source, config.ttl);

    // Fail fast: an unreadable or malformed sheet at startup aborts the
    // process instead of serving an empty table.
    let entries = refresher
        .load_once()
        .await
        .with_context(|| format!("initial load of {} failed", config.sheet_path.display()))?;
    info!(
        entries,
        sheet = %config.sheet_path.display(),
        ttl_secs = config.ttl.as_secs(),
        "initial mapping loaded"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let refresh_task = tokio::spawn(refresher.run(shutdown_rx));

    let addr: SocketAddr = format!("{}:{}", bind, config.port)
        .parse()
        .context("invalid bind address")?;
    let server = ApiServer::new(config, cache);

    tokio::select! {
        res = server.run(addr) => res.context("server error")?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            let _ = shutdown_tx.send(true);
            let _ = refresh_task.await;
        }
    }

    Ok(())
}

/// Validate the sheet and report what a load would install
async fn cmd_check(csv: Option<PathBuf>) -> Result<()> {
    let config = ApiConfig::from_env();
    let path = csv.unwrap_or(config.sheet_path);

    println!(
        "{} {}",
        "Checking transcode sheet:".cyan().bold(),
        path.display()
    );

    let reader = SheetReader::new(path.clone());
    let rows = reader
        .load()
        .await
        .with_context(|| format!("failed to load {}", path.display()))?;
    let snapshot = Snapshot::from_rows(&rows);

    println!(
        "{} {} rows, {} entries, {} skipped (empty LCP field)",
        "Sheet OK:".green().bold(),
        rows.len(),
        snapshot.len(),
        rows.len() - snapshot.len()
    );

    Ok(())
}
