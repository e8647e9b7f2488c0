//! Database initialization command

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{Overrides, RollcallConfig};

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// SQLite database file (default: ~/.rollcall/students.db)
    #[arg(long, env = "ROLLCALL_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

/// Create the database file and the students table, then exit.
pub async fn run_init(args: InitArgs, config: &RollcallConfig) -> Result<()> {
    let settings = config.resolve(Overrides {
        db_path: args.db_path,
        ..Overrides::default()
    })?;

    let pool = super::open_database(&settings.db_path, 1).await?;
    pool.close().await;

    println!("Database ready at {}", settings.db_path.display());
    Ok(())
}
