//! NBA Games Library
//!
//! Backing service for two browser guessing games: a salary comparison game
//! and a guess-the-player game. Source data lives in flat CSV files; this
//! crate parses and ranks it, persists it in SQLite, and serves it as JSON.
//!
//! ## Features
//!
//! - **Salary Ranking**: Dense per-season ranks by descending salary
//! - **Sample Data**: Deterministic synthetic salary file when none exists
//! - **Stats Filtering**: Per-game stats limited to regulars from the top 100
//! - **Lazy Loading**: The store fills itself on the first read of an empty kind
//! - **HTTP Service**: axum endpoints plus static page shells
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_games::{core::SourcePaths, service::RecordService, storage::RecordDatabase};
//!
//! # fn example() -> nba_games::Result<()> {
//! let db = RecordDatabase::open_in_memory()?;
//! let service = RecordService::new(
//!     db,
//!     SourcePaths {
//!         salary_csv: "nba_player_salaries.csv".into(),
//!         stats_csv: "nba_per_game_stats.csv".into(),
//!     },
//! );
//!
//! // First read loads (and if needed synthesizes) the salary data
//! for record in service.list_salaries()?.iter().take(3) {
//!     println!("#{} {} {}", record.rank, record.player, record.salary);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_GAMES_DB=/var/lib/nba-games/records.db
//! export NBA_GAMES_STATS_CSV=/data/nba_per_game_stats.csv
//! export NBA_GAMES_PORT=8080
//! export NBA_GAMES_STATIC_DIR=/srv/nba-games/static
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod ingest;
pub mod server;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{RecordKind, Year};
pub use error::{GamesError, Result};
pub use service::{LoadReport, RecordService};
pub use storage::{RecordDatabase, SalaryRecord, StatsRecord};
