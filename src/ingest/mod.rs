//! Data loader: source files to fully-typed, ranked records
//!
//! - `numeric`: Lenient numeric coercion for source fields
//! - `sample`: Deterministic synthetic salary dataset
//! - `salary`: Salary parsing and per-season dense ranking
//! - `stats`: Per-game stats parsing and filtering

pub mod numeric;
pub mod sample;
pub mod salary;
pub mod stats;

pub use numeric::{coerce_f64, coerce_i32, coerce_u32};
pub use sample::{ensure_salary_source, write_synthetic_salary_csv, SourceOrigin};
pub use salary::{load_salary_records, rank_by_season, read_salary_rows, SalaryRow};
pub use stats::{
    load_stats_records, passes_filter, read_kept_stats_rows, read_stats_rows, MAX_SOURCE_RANK,
    MIN_GAMES_PLAYED,
};

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;

/// CSV reader settings shared by both source formats
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Deserialize every row against the header.
///
/// Short rows are padded with empty fields so that missing trailing columns
/// read as empty instead of failing the whole file. Extra fields are ignored.
pub(crate) fn read_rows<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();

    for result in rdr.records() {
        let mut record = result?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }

    Ok(rows)
}
