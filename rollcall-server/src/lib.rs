//! rollcall-server: HTTP front-end over a single-table student register
//!
//! Layers:
//! - `db`: SQLite pool and the student repository
//! - `models`: validated input types
//! - `views`: template rendering seam and the built-in HTML renderer
//! - `http`: axum router, handlers and error mapping

pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use db::{create_pool, create_pool_with_options, DbError, SqlitePool, Student, StudentRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{NewStudent, ValidationError};
pub use views::{HtmlRenderer, RenderError, Template, ViewData, ViewRenderer};
