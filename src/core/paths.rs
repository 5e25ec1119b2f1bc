//! Filesystem locations for the database and source files

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};


pub const APP_DIR_NAME: &str = "nba-games";
pub const DEFAULT_SALARY_CSV: &str = "nba_player_salaries.csv";
pub const DEFAULT_STATS_CSV: &str = "nba_per_game_stats.csv";

/// Path: ~/.local/share/nba-games/records.db (platform data dir)
pub fn default_database_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join(APP_DIR_NAME).join("records.db")
}

/// Create the parent directory of `path` if it has one
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Write bytes to file, creating parent directories
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path)?;

    let mut f = fs::File::create(path)?;
    f.write_all(contents)
}
