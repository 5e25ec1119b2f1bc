//! Record kinds served by the store.

use crate::error::GamesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of record the store holds.
///
/// Each kind lives in its own table, is loaded from its own source file and
/// moves through the `EMPTY -> POPULATED` lifecycle independently.
///
/// # Examples
///
/// ```rust
/// use nba_games::RecordKind;
///
/// let kind: RecordKind = "salaries".parse().unwrap();
/// assert_eq!(kind, RecordKind::Salary);
/// assert_eq!(kind.to_string(), "salary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Salary,
    Stats,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Salary, RecordKind::Stats];

    /// Table holding records of this kind.
    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::Salary => "salary_records",
            RecordKind::Stats => "stats_records",
        }
    }

    /// Slot index used by per-kind bookkeeping arrays.
    pub(crate) fn index(&self) -> usize {
        match self {
            RecordKind::Salary => 0,
            RecordKind::Stats => 1,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Salary => "salary",
            RecordKind::Stats => "stats",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RecordKind {
    type Err = GamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "salaries" => Ok(RecordKind::Salary),
            "stats" | "player-stats" => Ok(RecordKind::Stats),
            _ => Err(GamesError::InvalidKind {
                kind: s.to_string(),
            }),
        }
    }
}
