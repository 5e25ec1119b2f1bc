//! Command implementations for the NBA games CLI

pub mod common;
pub mod list;
pub mod load;
pub mod serve;
pub mod synthesize;

#[cfg(test)]
mod tests;

use crate::{cli::CommonPaths, core::AppConfig, Result};

/// Resolve configuration: environment first, then CLI path overrides
pub fn resolve_config(paths: CommonPaths) -> Result<AppConfig> {
    Ok(AppConfig::from_env()?.with_overrides(paths.db, paths.salary_csv, paths.stats_csv))
}
