//! Shared shopping list HTTP service.
//!
//! Serves the list/item API on a single port. All state is held in memory and
//! is lost when the process exits.
//!
//! Usage:
//!   shoplist-server --port 3000 --directory users.toml

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use shoplist_access::StaticDirectory;
use shoplist_server::build_router;
use shoplist_service::ResourceService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "shoplist-server")]
#[command(about = "Shared shopping list HTTP service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// TOML file mapping user ids to roles (built-in users when omitted)
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Shopping list service starting...");
    let directory = match &args.directory {
        Some(path) => StaticDirectory::load_from(path)
            .with_context(|| format!("Failed to load role directory from {}", path.display()))?,
        None => {
            warn!("No directory file given, using built-in users");
            StaticDirectory::builtin()
        }
    };
    info!("Role directory has {} users", directory.len());

    let service = Arc::new(ResourceService::new(directory));
    let app = build_router(service);

    let addr = SocketAddr::new(args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", addr))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shopping list service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
