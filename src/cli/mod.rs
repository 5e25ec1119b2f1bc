//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::RecordKind;

/// Storage and source locations shared by every command
#[derive(Debug, Args)]
pub struct CommonPaths {
    /// SQLite database file (or set `NBA_GAMES_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Salary source CSV (or set `NBA_GAMES_SALARY_CSV`).
    #[clap(long, global = true)]
    pub salary_csv: Option<PathBuf>,

    /// Per-game stats source CSV (or set `NBA_GAMES_STATS_CSV`).
    #[clap(long, global = true)]
    pub stats_csv: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-games", about = "NBA salary and stats guessing games server")]
pub struct NbaGames {
    #[clap(flatten)]
    pub paths: CommonPaths,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server for the games.
    Serve {
        /// Interface to bind (or set `NBA_GAMES_HOST`).
        #[clap(long)]
        host: Option<String>,

        /// Port to listen on (or set `NBA_GAMES_PORT`).
        #[clap(long, short)]
        port: Option<u16>,

        /// Reload both record kinds from their sources before serving.
        #[clap(long)]
        reload: bool,
    },

    /// Clear and reload one record kind from its source file.
    Load {
        /// Record kind: salary | stats
        kind: RecordKind,

        /// Output the load report as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Print stored records, loading them first if the store is empty.
    List {
        /// Record kind: salary | stats
        kind: RecordKind,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Only show records for this season label (e.g. 2022-2023).
        #[clap(long, short)]
        season: Option<String>,

        /// Show at most this many records.
        #[clap(long, short)]
        limit: Option<usize>,
    },

    /// Write the synthetic salary CSV.
    Synthesize {
        /// Overwrite an existing salary file.
        #[clap(long)]
        force: bool,
    },
}
