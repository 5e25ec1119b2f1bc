//! Season and year types.

use crate::error::{GamesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for the calendar year a season ends in.
///
/// Stats sources label a season by its final year; the games display the
/// two-year form, e.g. `2023` is shown as `2022-23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    /// Season label in `"(Y-1)-YY"` form.
    ///
    /// A zero (or negative) year means the source had no usable year and
    /// produces an empty label.
    ///
    /// ```rust
    /// use nba_games::Year;
    ///
    /// assert_eq!(Year::new(2023).season_label(), "2022-23");
    /// assert_eq!(Year::new(0).season_label(), "");
    /// ```
    pub fn season_label(&self) -> String {
        if self.0 <= 0 {
            return String::new();
        }

        let digits = self.0.to_string();
        let tail = &digits[digits.len().saturating_sub(2)..];
        format!("{}-{}", self.0 - 1, tail)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = GamesError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse().map(Self).map_err(|_| GamesError::Config {
            message: format!("invalid year: {}", s),
        })
    }
}
