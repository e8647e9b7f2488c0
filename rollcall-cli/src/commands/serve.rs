//! HTTP server command
//!
//! Ensures the schema, then serves the student pages until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rollcall_server::{run_server, AppState, ServerConfig};

use crate::config::{Overrides, RollcallConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5001)
    #[arg(long, short = 'b', env = "ROLLCALL_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (default: ~/.rollcall/students.db)
    #[arg(long, env = "ROLLCALL_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum pooled database connections (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &RollcallConfig) -> Result<()> {
    let settings = config.resolve(Overrides {
        bind: args.bind,
        db_path: args.db_path,
        timeout_secs: args.timeout,
        max_connections: args.max_connections,
    })?;

    let pool = super::open_database(&settings.db_path, settings.max_connections).await?;

    let server_config = ServerConfig {
        bind_addr: settings.bind,
        request_timeout: settings.request_timeout,
    };

    // Blocks until shutdown
    run_server(AppState::new(pool, &settings.db_path), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
