//! Per-game stats parsing and filtering
//!
//! Only rows with a meaningful sample size from the top tier of the source
//! ranking are kept. The source rank passes through untouched, so kept ranks
//! may have gaps.

use super::{
    numeric::{coerce_f64, coerce_i32, coerce_u32},
    read_rows,
};
use crate::cli::types::Year;
use crate::error::{GamesError, Result};
use crate::storage::NewStatsRecord;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;


/// Minimum games played for a row to be kept (half an 82-game season)
pub const MIN_GAMES_PLAYED: u32 = 41;

/// Worst source rank still kept
pub const MAX_SOURCE_RANK: i32 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatsRow {
    #[serde(rename = "Unique_ID")]
    unique_id: String,
    #[serde(rename = "Rk")]
    rank: String,
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Pos")]
    position: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "G")]
    games: String,
    #[serde(rename = "MP")]
    minutes: String,
    #[serde(rename = "PTS")]
    points: String,
    #[serde(rename = "TRB")]
    rebounds: String,
    #[serde(rename = "AST")]
    assists: String,
    #[serde(rename = "STL")]
    steals: String,
    #[serde(rename = "BLK")]
    blocks: String,
    #[serde(rename = "Year")]
    year: String,
}

impl From<RawStatsRow> for NewStatsRecord {
    fn from(raw: RawStatsRow) -> Self {
        let year = coerce_i32(&raw.year);

        Self {
            source_id: raw.unique_id,
            rank: coerce_i32(&raw.rank),
            player: raw.player,
            team: raw.team,
            position: raw.position,
            age: coerce_u32(&raw.age),
            games: coerce_u32(&raw.games),
            mpg: coerce_f64(&raw.minutes),
            ppg: coerce_f64(&raw.points),
            rpg: coerce_f64(&raw.rebounds),
            apg: coerce_f64(&raw.assists),
            spg: coerce_f64(&raw.steals),
            bpg: coerce_f64(&raw.blocks),
            season: Year::new(year).season_label(),
            year,
        }
    }
}

impl RawStatsRow {
    fn is_kept(&self) -> bool {
        passes_filter(coerce_f64(&self.games), coerce_f64(&self.rank))
    }
}

/// Whether source games played and rank meet the thresholds.
///
/// Compared before any integer truncation, so a rank of `100.5` is dropped.
pub fn passes_filter(games: f64, rank: f64) -> bool {
    games >= f64::from(MIN_GAMES_PLAYED) && rank <= f64::from(MAX_SOURCE_RANK)
}

/// Parse stats CSV into typed records, before filtering.
pub fn read_stats_rows<R: Read>(reader: R) -> Result<Vec<NewStatsRecord>> {
    let raw: Vec<RawStatsRow> = read_rows(reader)?;
    Ok(raw.into_iter().map(NewStatsRecord::from).collect())
}

/// Parse stats CSV and keep only rows that pass [`passes_filter`].
///
/// Returns the number of source rows alongside the kept records.
pub fn read_kept_stats_rows<R: Read>(reader: R) -> Result<(usize, Vec<NewStatsRecord>)> {
    let raw: Vec<RawStatsRow> = read_rows(reader)?;
    let total = raw.len();

    let kept = raw
        .into_iter()
        .filter(RawStatsRow::is_kept)
        .map(NewStatsRecord::from)
        .collect();

    Ok((total, kept))
}

/// Load and filter stats records from `path`.
///
/// There is no synthetic fallback for stats; a missing file is reported as
/// [`GamesError::SourceNotFound`].
pub fn load_stats_records(path: &Path) -> Result<Vec<NewStatsRecord>> {
    if !path.exists() {
        return Err(GamesError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let (total, kept) = read_kept_stats_rows(File::open(path)?)?;
    debug!(total, kept = kept.len(), "filtered stats rows");

    Ok(kept)
}
