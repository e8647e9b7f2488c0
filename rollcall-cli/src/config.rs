//! Configuration for the rollcall CLI
//!
//! Values are resolved in order: command-line flag (or its environment
//! variable), then `~/.rollcall/config.toml`, then built-in defaults.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_BIND: &str = "127.0.0.1:5001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollcallConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    pub path: Option<PathBuf>,
    pub max_connections: Option<u32>,
}

/// Values given on the command line (or through their env vars)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub db_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub max_connections: Option<u32>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub request_timeout: Duration,
    pub max_connections: u32,
}

impl RollcallConfig {
    /// Load the config file.
    ///
    /// An explicitly requested file must exist. The default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get config file path: ~/.rollcall/config.toml
    pub fn config_path() -> PathBuf {
        home_dir().join("config.toml")
    }

    /// Merge command-line overrides over the file over defaults.
    pub fn resolve(&self, overrides: Overrides) -> Result<Settings> {
        let bind = match overrides.bind.or(self.server.bind) {
            Some(bind) => bind,
            None => DEFAULT_BIND.parse().context("invalid default bind address")?,
        };

        let db_path = overrides
            .db_path
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(default_db_path);

        let timeout_secs = overrides
            .timeout_secs
            .or(self.server.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let max_connections = overrides
            .max_connections
            .or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Settings {
            bind,
            db_path,
            request_timeout: Duration::from_secs(timeout_secs),
            max_connections,
        })
    }
}

/// Default database location: ~/.rollcall/students.db
pub fn default_db_path() -> PathBuf {
    home_dir().join("students.db")
}

fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rollcall")
}
