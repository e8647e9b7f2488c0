//! rollcall CLI - student register web app
//!
//! Subcommands:
//! - `serve`: run the HTTP front-end over the SQLite store
//! - `init`: create the database file and schema, then exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::RollcallConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Manage a list of students from the browser")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.rollcall/config.toml)
    #[arg(long, global = true, env = "ROLLCALL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve(commands::serve::ServeArgs),
    /// Create the database and students table
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load but don't fail if there is no .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config = RollcallConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Init(args) => commands::run_init(args, &config).await?,
    }

    Ok(())
}
