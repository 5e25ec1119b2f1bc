//! Core utilities for the NBA games service
//!
//! This module consolidates the ambient pieces used across the application:
//! - `config`: Environment-driven runtime configuration
//! - `paths`: Default file locations and small file helpers

pub mod config;
pub mod paths;

// Re-export commonly used items for convenience
pub use config::{AppConfig, SourcePaths};
pub use paths::{default_database_path, ensure_parent_dir, write_bytes};
