//! Database layer - connection pool and the student repository
//!
//! Every repository call acquires a pooled connection for a single statement
//! and hands it back when that statement finishes. Nothing holds a connection
//! across requests.

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use sqlx::SqlitePool;
