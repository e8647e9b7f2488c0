//! SQLite connection pool management

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::DbError;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the SQLite database at `path`.
///
/// The parent directory and the database file are created when missing.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("database/students.db")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, DbError> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the database with a custom connection limit.
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, DbError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.display(), max_connections, "sqlite pool ready");
    Ok(pool)
}
