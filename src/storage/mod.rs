//! Storage layer for the NBA games service
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Bulk replace and read operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::RecordDatabase;
