//! Confpanel Web Server Binary
//!
//! This binary starts the config API server that backs the terminal
//! editor. It serves the configuration file over a small REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, ./config.yaml)
//! confpanel-web
//!
//! # Specify port and configuration file
//! confpanel-web --port 8080 --config ~/bot/config.yaml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confpanel::web;

/// Confpanel Web Server - REST API for the configuration editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path to the configuration file to serve
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Configuration file: {}", args.config.display());

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(args.config, addr).await
}
