//! Application configuration resolved from environment variables
//!
//! Every setting has a default, an environment variable, and (in the binary)
//! a CLI flag. Flags win over the environment, which wins over defaults.

use super::paths::{default_database_path, DEFAULT_SALARY_CSV, DEFAULT_STATS_CSV};
use crate::error::Result;
use std::{env, path::PathBuf};
use tracing::debug;


pub const DB_ENV_VAR: &str = "NBA_GAMES_DB";
pub const SALARY_CSV_ENV_VAR: &str = "NBA_GAMES_SALARY_CSV";
pub const STATS_CSV_ENV_VAR: &str = "NBA_GAMES_STATS_CSV";
pub const HOST_ENV_VAR: &str = "NBA_GAMES_HOST";
pub const PORT_ENV_VAR: &str = "NBA_GAMES_PORT";
pub const STATIC_DIR_ENV_VAR: &str = "NBA_GAMES_STATIC_DIR";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

// Environment variables are process-global; tests touching them serialize here
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Locations of the two source files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub salary_csv: PathBuf,
    pub stats_csv: PathBuf,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub sources: SourcePaths,
    pub host: String,
    pub port: u16,
    /// Directory served under `/static` (game scripts and assets)
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_database_path(),
            sources: SourcePaths {
                salary_csv: PathBuf::from(DEFAULT_SALARY_CSV),
                stats_csv: PathBuf::from(DEFAULT_STATS_CSV),
            },
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Build configuration from defaults overlaid with environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env_value(PORT_ENV_VAR) {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => defaults.port,
        };

        Ok(Self {
            db_path: env_value(DB_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            sources: SourcePaths {
                salary_csv: env_value(SALARY_CSV_ENV_VAR)
                    .map(PathBuf::from)
                    .unwrap_or(defaults.sources.salary_csv),
                stats_csv: env_value(STATS_CSV_ENV_VAR)
                    .map(PathBuf::from)
                    .unwrap_or(defaults.sources.stats_csv),
            },
            host: env_value(HOST_ENV_VAR).unwrap_or(defaults.host),
            port,
            static_dir: env_value(STATIC_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Apply explicit overrides (from CLI flags) on top of this configuration
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        salary_csv: Option<PathBuf>,
        stats_csv: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        if let Some(path) = salary_csv {
            self.sources.salary_csv = path;
        }
        if let Some(path) = stats_csv {
            self.sources.stats_csv = path;
        }
        self
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_value(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            debug!("{key} not set, using default");
            None
        }
    }
}
