//! Salary parsing and per-season dense ranking

use super::{
    numeric::coerce_f64,
    read_rows,
    sample::{ensure_salary_source, SourceOrigin},
};
use crate::error::Result;
use crate::storage::NewSalaryRecord;
use serde::Deserialize;
use std::{collections::HashMap, fs::File, io::Read, path::Path};
use tracing::debug;


/// Row as it appears in the source, before coercion
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSalaryRow {
    player: String,
    season: String,
    salary: String,
    // Older exports label the season column this way
    column_year: String,
}

/// A parsed salary row awaiting its rank
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRow {
    pub player: String,
    pub season: String,
    pub salary: f64,
}

impl From<RawSalaryRow> for SalaryRow {
    fn from(raw: RawSalaryRow) -> Self {
        let season = if raw.season.is_empty() {
            raw.column_year
        } else {
            raw.season
        };

        Self {
            player: raw.player,
            season,
            salary: coerce_f64(&raw.salary),
        }
    }
}

/// Parse salary CSV with a `player,season,salary` header.
pub fn read_salary_rows<R: Read>(reader: R) -> Result<Vec<SalaryRow>> {
    let raw: Vec<RawSalaryRow> = read_rows(reader)?;
    Ok(raw.into_iter().map(SalaryRow::from).collect())
}

/// Rank rows within each season by salary, highest first.
///
/// Seasons are emitted in order of first appearance. The sort is stable, so
/// equal salaries keep their source order and ranks stay dense (1..=n).
pub fn rank_by_season(rows: Vec<SalaryRow>) -> Vec<NewSalaryRecord> {
    let mut partitions: Vec<Vec<SalaryRow>> = Vec::new();
    let mut index_by_season: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let idx = *index_by_season
            .entry(row.season.clone())
            .or_insert_with(|| {
                partitions.push(Vec::new());
                partitions.len() - 1
            });
        partitions[idx].push(row);
    }

    let mut ranked = Vec::new();
    for mut partition in partitions {
        partition.sort_by(|a, b| b.salary.total_cmp(&a.salary));

        ranked.extend(
            partition
                .into_iter()
                .enumerate()
                .map(|(i, row)| NewSalaryRecord {
                    player: row.player,
                    season: row.season,
                    salary: row.salary,
                    rank: i as u32 + 1,
                }),
        );
    }

    ranked
}

/// Load ranked salary records from `path`, synthesizing the file if absent.
pub fn load_salary_records(path: &Path) -> Result<(Vec<NewSalaryRecord>, SourceOrigin)> {
    let origin = ensure_salary_source(path)?;

    let rows = read_salary_rows(File::open(path)?)?;
    debug!(rows = rows.len(), "parsed salary rows");

    Ok((rank_by_season(rows), origin))
}
