//! hostpulse daemon
//!
//! Probes a single remote host over SSH and republishes the figures as JSON
//! through an axum HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hostpulse_exec::{RemoteExecutor, SshExecutor, Target};

mod api;
mod config;
mod router;
mod state;

use config::Config;
use router::create_router;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "hostpulse", about = "Single-host SSH monitoring daemon")]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    init_tracing(&config.server.log_level);

    // Load the key and build the immutable target up front; an unreadable
    // key aborts startup rather than surfacing per-request.
    let target = Target::load(
        config.target.host.clone(),
        config.target.port,
        config.target.user.clone(),
        &config.target.key_path,
        config.target.connect_timeout(),
    )?;

    info!(
        host = %config.target.host,
        port = config.target.port,
        user = %config.target.user,
        "target configured"
    );

    let executor: Arc<dyn RemoteExecutor> = Arc::new(SshExecutor::new(target));
    let state = Arc::new(AppState::new(executor, config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(addr = %config.server.bind, "hostpulse listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
