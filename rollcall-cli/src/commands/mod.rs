//! Command implementations for the rollcall CLI

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;

use std::path::Path;

use anyhow::{Context, Result};
use rollcall_server::{create_pool_with_options, SqlitePool, StudentRepo};

/// Open the database and make sure the students table exists.
pub(crate) async fn open_database(path: &Path, max_connections: u32) -> Result<SqlitePool> {
    tracing::info!("Opening database at {}", path.display());

    let pool = create_pool_with_options(path, max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", path.display()))?;

    StudentRepo::new(&pool)
        .ensure_schema()
        .await
        .context("Failed to create students table")?;

    Ok(pool)
}
